//! Unit tests for the review form controller.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::{fixture, rstest};

use super::{
    FormChange, FormMode, FormObserver, FormPhase, ReviewForm, SUBMIT_LABEL_INCOMPLETE,
    SUBMIT_LABEL_READY,
};
use crate::api::RecordingMutationTrigger;
use crate::review::{ExistingReview, ImageFile, ReviewFormError, SeatLocation};
use crate::routing::{ReviewId, TheaterId};

fn theater() -> TheaterId {
    TheaterId::new("7").expect("theater id should parse")
}

fn review_id() -> ReviewId {
    ReviewId::new("42").expect("review id should parse")
}

#[fixture]
fn existing() -> ExistingReview {
    ExistingReview {
        floor: "3".to_owned(),
        section: "VIP".to_owned(),
        seat_row: "5".to_owned(),
        seat_number: "12".to_owned(),
        rating: 4,
        content: "great view".to_owned(),
        images: vec!["url1".to_owned(), "url2".to_owned()],
    }
}

#[fixture]
fn create_form() -> ReviewForm {
    ReviewForm::create(theater())
}

#[fixture]
fn edit_form(existing: ExistingReview) -> ReviewForm {
    ReviewForm::edit(theater(), review_id(), &existing).expect("stored review should seed form")
}

fn png(name: &str) -> ImageFile {
    ImageFile::from_bytes(name, b"png-bytes".to_vec())
}

#[derive(Clone, Default)]
struct ChangeLog(Rc<RefCell<Vec<FormChange>>>);

impl ChangeLog {
    fn changes(&self) -> Vec<FormChange> {
        self.0.borrow().clone()
    }
}

impl FormObserver for ChangeLog {
    fn form_changed(&self, change: FormChange, _form: &ReviewForm) {
        self.0.borrow_mut().push(change);
    }
}

#[rstest]
fn create_form_starts_with_defaults(create_form: ReviewForm) {
    assert_eq!(create_form.mode(), &FormMode::Create);
    assert_eq!(create_form.seat(), &SeatLocation::new("1", "OP", "1", "1"));
    assert_eq!(create_form.rating().get(), 0);
    assert!(create_form.content().is_empty());
    assert!(create_form.images().is_empty());
    assert_eq!(create_form.phase(), FormPhase::Editing);
    assert!(!create_form.is_seat_locked());
    assert!(!create_form.is_submittable());
    assert_eq!(create_form.submit_label(), SUBMIT_LABEL_INCOMPLETE);
    assert_eq!(create_form.routing_ids().review_id(), None);
}

#[rstest]
fn edit_form_is_seeded_from_stored_review(edit_form: ReviewForm) {
    assert_eq!(
        edit_form.mode(),
        &FormMode::Edit {
            review_id: review_id()
        }
    );
    assert_eq!(edit_form.seat(), &SeatLocation::new("3", "VIP", "5", "12"));
    assert_eq!(edit_form.rating().get(), 4);
    assert_eq!(edit_form.content().as_str(), "great view");
    assert_eq!(edit_form.images().len(), 2);
    assert!(edit_form.is_seat_locked());
    assert!(edit_form.is_submittable());
    assert_eq!(edit_form.submit_label(), SUBMIT_LABEL_READY);
    assert_eq!(
        edit_form.routing_ids().review_id().map(ReviewId::as_str),
        Some("42")
    );
}

#[rstest]
fn edit_rejects_stored_review_outside_limits(mut existing: ExistingReview) {
    existing.rating = 9;

    let result = ReviewForm::edit(theater(), review_id(), &existing);

    assert!(matches!(
        result,
        Err(ReviewFormError::RatingOutOfRange { value: 9, .. })
    ));
}

#[rstest]
#[case("", 0, false)]
#[case("", 3, false)]
#[case("nice", 0, false)]
#[case("nice", 1, true)]
#[case("nice", 5, true)]
#[case(" ", 2, true)]
fn submittable_requires_content_and_rating(
    mut create_form: ReviewForm,
    #[case] content: &str,
    #[case] rating: u8,
    #[case] expected: bool,
) {
    create_form.set_content(content).expect("content within limit");
    create_form.set_rating(rating).expect("rating within range");

    assert_eq!(create_form.is_submittable(), expected);
    let label = if expected {
        SUBMIT_LABEL_READY
    } else {
        SUBMIT_LABEL_INCOMPLETE
    };
    assert_eq!(create_form.submit_label(), label);
}

#[rstest]
fn rating_above_maximum_is_rejected_and_kept(mut create_form: ReviewForm) {
    create_form.set_rating(3).expect("rating within range");

    let result = create_form.set_rating(6);

    assert_eq!(
        result,
        Err(ReviewFormError::RatingOutOfRange { value: 6, max: 5 })
    );
    assert_eq!(create_form.rating().get(), 3);
}

#[rstest]
fn overlong_content_is_rejected_and_previous_text_kept(mut create_form: ReviewForm) {
    create_form.set_content("short").expect("content within limit");
    let too_long = "x".repeat(201);

    let result = create_form.set_content(&too_long);

    assert_eq!(
        result,
        Err(ReviewFormError::ContentTooLong {
            attempted: 201,
            max_length: 200
        })
    );
    assert_eq!(create_form.content().as_str(), "short");
}

#[rstest]
fn seat_can_change_in_create_mode(mut create_form: ReviewForm) {
    let seat = SeatLocation::new("2", "B", "4", "9");

    create_form.set_seat(seat.clone()).expect("seat is editable");

    assert_eq!(create_form.seat(), &seat);
}

#[rstest]
fn seat_is_locked_in_edit_mode(mut edit_form: ReviewForm) {
    let result = edit_form.set_seat(SeatLocation::new("2", "B", "4", "9"));

    assert_eq!(result, Err(ReviewFormError::SeatLocked));
    assert_eq!(edit_form.seat(), &SeatLocation::new("3", "VIP", "5", "12"));
}

#[rstest]
fn open_confirmation_requires_submittable_form(mut create_form: ReviewForm) {
    assert_eq!(
        create_form.open_confirmation().map(|_| ()),
        Err(ReviewFormError::NotSubmittable)
    );
    assert_eq!(create_form.phase(), FormPhase::Editing);
}

#[rstest]
fn confirmation_can_be_cancelled_without_submitting(mut edit_form: ReviewForm) {
    let trigger = RecordingMutationTrigger::default();

    edit_form.open_confirmation().expect("form is submittable");
    assert_eq!(edit_form.phase(), FormPhase::ConfirmationPending);
    edit_form.cancel_confirmation().expect("confirmation is open");

    assert_eq!(edit_form.phase(), FormPhase::Editing);
    assert!(trigger.take().is_empty());
    edit_form.set_rating(2).expect("form is editable again");
}

#[rstest]
fn edits_are_refused_while_confirmation_is_open(mut edit_form: ReviewForm) {
    edit_form.open_confirmation().expect("form is submittable");

    assert_eq!(
        edit_form.set_content("changed"),
        Err(ReviewFormError::ConfirmationOpen)
    );
    assert_eq!(edit_form.content().as_str(), "great view");
}

#[rstest]
fn confirm_without_open_confirmation_is_refused(mut edit_form: ReviewForm) {
    let trigger = RecordingMutationTrigger::default();

    assert_eq!(
        edit_form.confirm(&trigger),
        Err(ReviewFormError::NotAwaitingConfirmation)
    );
    assert!(trigger.take().is_empty());
}

#[rstest]
fn confirm_hands_payload_to_trigger_once(mut edit_form: ReviewForm) {
    let trigger = RecordingMutationTrigger::default();
    edit_form.open_confirmation().expect("form is submittable");

    edit_form.confirm(&trigger).expect("confirmation is open");

    assert_eq!(edit_form.phase(), FormPhase::Submitted);
    assert_eq!(
        edit_form.confirm(&trigger),
        Err(ReviewFormError::AlreadySubmitted)
    );
    assert_eq!(
        edit_form.set_rating(1),
        Err(ReviewFormError::AlreadySubmitted)
    );

    let submissions = trigger.take();
    assert_eq!(submissions.len(), 1);
    let (routing, payload) = submissions.first().expect("one submission");
    assert_eq!(routing, &edit_form.routing_ids());
    assert_eq!(payload.data().rating, 4);
    assert_eq!(payload.data().seat_row, "5");
}

#[rstest]
fn payload_carries_only_new_files_and_removed_references(mut edit_form: ReviewForm) {
    let stored = edit_form
        .images()
        .find_by_reference("url1")
        .expect("stored image is staged");
    assert!(edit_form.remove_image(stored).expect("form is editable"));
    edit_form
        .add_files([png("new.png")])
        .expect("form is editable");

    let payload = edit_form.build_payload();

    assert_eq!(payload.images().len(), 1);
    assert_eq!(
        payload.images().first().map(ImageFile::file_name),
        Some("new.png")
    );
    assert_eq!(payload.delete_images(), ["url1".to_owned()]);

    let view = edit_form.confirmation_view();
    assert_eq!(view.new_images, 1);
    assert_eq!(view.removed_images, 1);
    assert!(view.is_edit);
}

#[rstest]
fn removing_unknown_image_changes_nothing(mut create_form: ReviewForm) {
    let added = create_form
        .add_files([png("a.png")])
        .expect("form is editable");
    let id = *added.first().expect("one id allocated");
    assert!(create_form.remove_image(id).expect("form is editable"));

    assert!(!create_form.remove_image(id).expect("form is editable"));
    assert!(create_form.images().is_empty());
    assert!(create_form.build_payload().delete_images().is_empty());
}

#[rstest]
fn observers_see_each_accepted_change(mut create_form: ReviewForm) {
    let log = ChangeLog::default();
    create_form.subscribe(Box::new(log.clone()));
    let trigger = RecordingMutationTrigger::default();

    create_form.set_content("decent").expect("content within limit");
    create_form.set_rating(9).expect_err("rating out of range");
    create_form.set_rating(3).expect("rating within range");
    create_form
        .add_files([png("a.png")])
        .expect("form is editable");
    create_form.open_confirmation().expect("form is submittable");
    create_form.confirm(&trigger).expect("confirmation is open");

    assert_eq!(
        log.changes(),
        vec![
            FormChange::Content,
            FormChange::Rating,
            FormChange::Images,
            FormChange::Phase(FormPhase::ConfirmationPending),
            FormChange::Phase(FormPhase::Submitted),
        ]
    );
}

//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use seatview::ClientError;
use seatview::api::MutationOutcome;

/// Writes one line per settled submission to stdout.
///
/// # Errors
///
/// Returns [`ClientError::Io`] when stdout cannot be written.
pub fn write_outcomes(outcomes: &[MutationOutcome]) -> Result<(), ClientError> {
    let mut stdout = io::stdout().lock();
    write_outcomes_to(&mut stdout, outcomes)
}

/// Writes one line per settled submission to the given writer.
///
/// # Errors
///
/// Returns [`ClientError::Io`] when the writer fails.
pub fn write_outcomes_to<W: Write>(
    writer: &mut W,
    outcomes: &[MutationOutcome],
) -> Result<(), ClientError> {
    for outcome in outcomes {
        match &outcome.result {
            Ok(receipt) => {
                let stored = receipt
                    .review_id
                    .as_deref()
                    .map_or_else(String::new, |id| format!(" as review {id}"));
                writeln!(
                    writer,
                    "Stored {} (HTTP {}){stored}",
                    outcome.routing, receipt.status
                )
                .map_err(|e| io_error(&e))?;
            }
            Err(error) => {
                writeln!(writer, "Failed {}: {error}", outcome.routing).map_err(|e| io_error(&e))?;
            }
        }
    }
    Ok(())
}

/// Converts an I/O error to a [`ClientError::Io`].
#[must_use]
pub fn io_error(error: &io::Error) -> ClientError {
    ClientError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use seatview::ClientError;
    use seatview::api::{MutationOutcome, ReviewReceipt};
    use seatview::routing::{ReviewId, RoutingIds, TheaterId};

    use super::write_outcomes_to;

    fn theater() -> TheaterId {
        TheaterId::new("7").expect("theater id should parse")
    }

    #[test]
    fn writes_success_and_failure_lines() {
        let outcomes = vec![
            MutationOutcome {
                routing: RoutingIds::for_create(theater()),
                result: Ok(ReviewReceipt {
                    status: 201,
                    review_id: Some("99".to_owned()),
                }),
            },
            MutationOutcome {
                routing: RoutingIds::for_edit(
                    theater(),
                    ReviewId::new("42").expect("review id should parse"),
                ),
                result: Err(ClientError::NotFound {
                    message: "gone".to_owned(),
                }),
            },
        ];
        let mut buffer = Vec::new();

        write_outcomes_to(&mut buffer, &outcomes).expect("write should succeed");

        let output = String::from_utf8(buffer).expect("output should be UTF-8");
        assert_eq!(
            output,
            "Stored theater 7 (new review) (HTTP 201) as review 99\n\
             Failed theater 7 review 42: review not found: gone\n"
        );
    }
}

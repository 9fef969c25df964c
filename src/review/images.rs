//! Ordered list of images attached to a review draft.
//!
//! The list holds two kinds of entries: files picked during this session,
//! which must be uploaded, and images that already belong to the review
//! being edited, which are only referenced by URL. Removing one of the
//! latter records its URL so the server can be told to delete it.

use std::fmt;

use super::image_file::ImageFile;

/// Session-local identity of a staged image. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageId(u64);

impl ImageId {
    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// Where a staged image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Picked during this session; uploaded on submit.
    Local(ImageFile),
    /// Already stored with the review; identified by its URL.
    Remote(String),
}

/// One image currently attached to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedImage {
    id: ImageId,
    source: ImageSource,
    preview: String,
}

impl StagedImage {
    fn local(id: ImageId, file: ImageFile) -> Self {
        let preview = format!("blob:seatview/{}/{}", id.get(), file.file_name());
        Self {
            id,
            source: ImageSource::Local(file),
            preview,
        }
    }

    fn remote(id: ImageId, reference: String) -> Self {
        Self {
            id,
            preview: reference.clone(),
            source: ImageSource::Remote(reference),
        }
    }

    /// Returns the image identity.
    #[must_use]
    pub const fn id(&self) -> ImageId {
        self.id
    }

    /// Returns where the image comes from.
    #[must_use]
    pub const fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Returns the reference used to display the image.
    #[must_use]
    pub const fn preview_reference(&self) -> &str {
        self.preview.as_str()
    }

    /// Returns the file to upload, if this image is new.
    #[must_use]
    pub const fn local_file(&self) -> Option<&ImageFile> {
        match &self.source {
            ImageSource::Local(file) => Some(file),
            ImageSource::Remote(_) => None,
        }
    }

    /// Returns the stored URL, if this image already exists remotely.
    #[must_use]
    pub const fn remote_reference(&self) -> Option<&str> {
        match &self.source {
            ImageSource::Local(_) => None,
            ImageSource::Remote(reference) => Some(reference.as_str()),
        }
    }
}

/// Read-only view of the list used to build a submission.
#[derive(Debug, Clone, Copy)]
pub struct ImageSnapshot<'list> {
    images: &'list [StagedImage],
    deleted_references: &'list [String],
}

impl<'list> ImageSnapshot<'list> {
    /// Images in display order.
    #[must_use]
    pub const fn images(&self) -> &'list [StagedImage] {
        self.images
    }

    /// URLs of pre-existing images the reviewer removed.
    #[must_use]
    pub const fn deleted_references(&self) -> &'list [String] {
        self.deleted_references
    }

    /// Files that still need uploading, in display order.
    pub fn local_files(&self) -> impl Iterator<Item = &'list ImageFile> + 'list {
        self.images.iter().filter_map(StagedImage::local_file)
    }
}

/// Images attached to one editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageList {
    next_id: u64,
    images: Vec<StagedImage>,
    deleted_references: Vec<String>,
}

impl ImageList {
    /// Creates an empty list for a new review.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the list with images already stored on the review.
    #[must_use]
    pub fn with_existing<I, S>(references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for reference in references {
            let id = list.allocate_id();
            list.images.push(StagedImage::remote(id, reference.into()));
        }
        list
    }

    /// Appends new files after every existing entry, preserving input order.
    pub fn add_files<I>(&mut self, files: I) -> Vec<ImageId>
    where
        I: IntoIterator<Item = ImageFile>,
    {
        files
            .into_iter()
            .map(|file| {
                let id = self.allocate_id();
                self.images.push(StagedImage::local(id, file));
                id
            })
            .collect()
    }

    /// Removes the image with `id`.
    ///
    /// Removing a pre-existing image records its URL for deletion; removing
    /// a new file leaves no trace. Returns `false` when `id` is unknown,
    /// which includes images that were already removed.
    pub fn remove(&mut self, id: ImageId) -> bool {
        let Some(position) = self.images.iter().position(|image| image.id == id) else {
            return false;
        };

        let removed = self.images.remove(position);
        if let ImageSource::Remote(reference) = removed.source {
            self.deleted_references.push(reference);
        }
        true
    }

    /// Finds the entry for a pre-existing image by its URL.
    #[must_use]
    pub fn find_by_reference(&self, reference: &str) -> Option<ImageId> {
        self.images
            .iter()
            .find(|image| image.remote_reference() == Some(reference))
            .map(StagedImage::id)
    }

    /// Returns the entry with `id`, if present.
    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<&StagedImage> {
        self.images.iter().find(|image| image.id == id)
    }

    /// Returns a read-only view for payload construction.
    #[must_use]
    pub fn snapshot(&self) -> ImageSnapshot<'_> {
        ImageSnapshot {
            images: &self.images,
            deleted_references: &self.deleted_references,
        }
    }

    /// Number of images currently attached.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true when no images are attached.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    const fn allocate_id(&mut self) -> ImageId {
        self.next_id = self.next_id.saturating_add(1);
        ImageId(self.next_id)
    }
}

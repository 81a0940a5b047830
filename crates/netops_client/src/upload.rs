use reqwest::multipart::{Form, Part};

/// One file staged for upload under a fixed multipart field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Up to three optionally-present files posted as one multipart request.
///
/// An empty bundle still posts an (empty) form; absent slots simply do not
/// appear in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadBundle {
    parts: Vec<UploadPart>,
}

impl UploadBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.parts.push(UploadPart {
            field: field.into(),
            file_name: file_name.into(),
            bytes,
        });
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub(crate) fn into_form(self) -> Form {
        let mut form = Form::new();
        for part in self.parts {
            form = form.part(part.field, Part::bytes(part.bytes).file_name(part.file_name));
        }
        form
    }
}

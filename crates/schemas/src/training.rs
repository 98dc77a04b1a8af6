//! Training material form
//!
//! `type` is the discriminant: articles carry inline `content`, every other
//! type carries a file. A file-based material being edited may keep its
//! already uploaded file, which the caller signals with `existingFile`.

use std::sync::LazyLock;

use agriform_validator::cross_field::{NotPlaceholder, RequiredFor};
use agriform_validator::discriminant::{Discriminant, Gate};
use agriform_validator::foundation::{ErrorKind, ValidationError};
use agriform_validator::rules::rule_fn;
use agriform_validator::schema::{Binding, FormSchema};
use agriform_validator::validators::{max_length, one_of, required, url};

use crate::categories::TrainingType;
use crate::policy::DEFAULT_PLACEHOLDERS;

static TYPE_SPELLINGS: LazyLock<Vec<&'static str>> = LazyLock::new(TrainingType::spellings);

static SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| {
    FormSchema::builder("training_material")
        .field("type", "Material type")
        .field("title", "Title")
        .field("description", "Description")
        .field("category", "Category")
        .field("content", "Content")
        .field("fileUrl", "File")
        .field("existingFile", "Existing file")
        .bind(
            Binding::new("type")
                .check(required())
                .check(one_of(TYPE_SPELLINGS.as_slice())),
        )
        .bind(
            Binding::new("title")
                .check(required())
                .check(max_length(200))
                .rule(NotPlaceholder::new(DEFAULT_PLACEHOLDERS)),
        )
        .bind(Binding::new("description").check(required()).check(max_length(2000)))
        .bind(Binding::new("category").check(required()))
        .bind(
            Binding::new("content")
                .rule(RequiredFor::<TrainingType>::new("type"))
                .when(Gate::any_of("type", &[TrainingType::Article])),
        )
        .bind(Binding::new("fileUrl").check(url()))
        .bind(
            Binding::new("fileUrl")
                .rule(rule_fn(&["type", "existingFile"], |input| {
                    let keeps_upload = input.sibling("existingFile").as_bool() == Some(true);
                    if keeps_upload || !input.value.is_blank() {
                        return Ok(());
                    }
                    let kind = TrainingType::from_value(input.sibling("type"))
                        .map_or("this material", TrainingType::display_name);
                    Err(ValidationError::new("required", format!("{{label}} is required for {kind}"))
                        .with_kind(ErrorKind::Presence))
                }))
                .when(Gate::on("type", TrainingType::is_file_based)),
        )
        .build()
        .expect("training material schema declares every field it binds")
});

/// The training material schema.
///
/// # Examples
///
/// ```
/// use agriform_schemas::training::training_material;
/// use agriform_validator::foundation::ValueMap;
///
/// let values = ValueMap::new()
///     .with("type", "video")
///     .with("title", "Drip irrigation setup")
///     .with("description", "Laying lines for a half-acre plot")
///     .with("category", "irrigation");
/// let result = training_material().validate(&values);
/// assert_eq!(result.errors.messages("fileUrl"), ["File is required for videos"]);
///
/// let editing = values.with("existingFile", true);
/// assert!(training_material().validate(&editing).is_valid);
/// ```
pub fn training_material() -> &'static FormSchema {
    &SCHEMA
}

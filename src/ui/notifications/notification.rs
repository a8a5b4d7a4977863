// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `ToastMessage` struct, the `ToastKind` enum and the
//! visual variant each kind maps to.

use crate::ui::design_tokens::toast as toast_palette;
use iced::Color;
use std::fmt;

/// Opaque identifier for a toast message.
///
/// Identifiers are assigned by the store when a message is created and are
/// never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of toast. Determines the visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    /// Neutral information (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something went wrong upstream (red).
    Error,
}

impl ToastKind {
    /// Maps a free-form tag to a kind.
    ///
    /// `"success"` and `"error"` map to their variants; every other tag,
    /// including an empty one, falls back to `Info`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    /// Returns the canonical tag for this kind.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

impl From<Option<ToastKind>> for ToastKind {
    fn from(kind: Option<ToastKind>) -> Self {
        kind.unwrap_or_default()
    }
}

/// Background and text colors for a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastVariant {
    pub background: Color,
    pub text: Color,
}

impl ToastVariant {
    /// Returns the variant for a kind. Total over every kind.
    #[must_use]
    pub fn for_kind(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Info => Self {
                background: toast_palette::INFO_BACKGROUND,
                text: toast_palette::INFO_TEXT,
            },
            ToastKind::Success => Self {
                background: toast_palette::SUCCESS_BACKGROUND,
                text: toast_palette::SUCCESS_TEXT,
            },
            ToastKind::Error => Self {
                background: toast_palette::ERROR_BACKGROUND,
                text: toast_palette::ERROR_TEXT,
            },
        }
    }

    /// Background as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn background_hex(&self) -> String {
        to_hex(self.background)
    }

    /// Text color as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn text_hex(&self) -> String {
        to_hex(self.text)
    }
}

fn to_hex(color: Color) -> String {
    let [r, g, b, _] = color.into_rgba8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Caller-supplied shape used to create a toast, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastDescriptor {
    pub kind: Option<ToastKind>,
    pub title: String,
    pub description: Option<String>,
}

impl ToastDescriptor {
    /// Creates a descriptor with the given title and no explicit kind.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            kind: None,
            title: title.into(),
            description: None,
        }
    }

    /// Creates an info descriptor.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).kind(ToastKind::Info)
    }

    /// Creates a success descriptor.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).kind(ToastKind::Success)
    }

    /// Creates an error descriptor.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).kind(ToastKind::Error)
    }

    /// Sets the kind.
    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the longer description shown under the title.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A live toast message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    id: ToastId,
    kind: ToastKind,
    title: String,
    description: Option<String>,
}

impl ToastMessage {
    /// Builds a message from a descriptor and an already assigned id.
    pub fn new(id: ToastId, descriptor: ToastDescriptor) -> Self {
        Self {
            id,
            kind: descriptor.kind.into(),
            title: descriptor.title,
            description: descriptor.description,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the visual variant for this message.
    #[must_use]
    pub fn variant(&self) -> ToastVariant {
        ToastVariant::for_kind(self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = ToastId::generate();
        let b = ToastId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn error_variant_matches_palette() {
        let variant = ToastVariant::for_kind(ToastKind::Error);
        assert_eq!(variant.background_hex(), "#fddede");
        assert_eq!(variant.text_hex(), "#c53030");
    }

    #[test]
    fn success_variant_matches_palette() {
        let variant = ToastVariant::for_kind(ToastKind::Success);
        assert_eq!(variant.background_hex(), "#e6fffa");
        assert_eq!(variant.text_hex(), "#2e656a");
    }

    #[test]
    fn info_variant_matches_palette() {
        let variant = ToastVariant::for_kind(ToastKind::Info);
        assert_eq!(variant.background_hex(), "#ebf8ff");
        assert_eq!(variant.text_hex(), "#3172b7");
    }

    #[test]
    fn missing_kind_renders_as_info() {
        let message = ToastMessage::new(ToastId::from("toast-id"), ToastDescriptor::new("Info Title"));
        assert_eq!(message.kind(), ToastKind::Info);
        assert_eq!(message.variant(), ToastVariant::for_kind(ToastKind::Info));
    }

    #[test]
    fn unknown_tags_fall_back_to_info() {
        assert_eq!(ToastKind::from_tag("warning"), ToastKind::Info);
        assert_eq!(ToastKind::from_tag(""), ToastKind::Info);
        assert_eq!(ToastKind::from_tag("ERROR"), ToastKind::Info);
        assert_eq!(ToastKind::from_tag("error"), ToastKind::Error);
        assert_eq!(ToastKind::from_tag("success"), ToastKind::Success);
    }

    #[test]
    fn tags_round_trip_through_from_tag() {
        for kind in [ToastKind::Info, ToastKind::Success, ToastKind::Error] {
            assert_eq!(ToastKind::from_tag(kind.tag()), kind);
        }
    }

    #[test]
    fn descriptor_builder_sets_fields() {
        let descriptor = ToastDescriptor::error("Error title").description("Error message");
        assert_eq!(descriptor.kind, Some(ToastKind::Error));
        assert_eq!(descriptor.title, "Error title");
        assert_eq!(descriptor.description.as_deref(), Some("Error message"));
    }

    #[test]
    fn variants_are_distinct() {
        let info = ToastVariant::for_kind(ToastKind::Info);
        let success = ToastVariant::for_kind(ToastKind::Success);
        let error = ToastVariant::for_kind(ToastKind::Error);
        assert_ne!(info, success);
        assert_ne!(info, error);
        assert_ne!(success, error);
    }
}

//! DOM measurement for click handling.
//!
//! The rendered size of an overlay changes with viewport and
//! orientation, so both its client rectangle and its `viewBox` are read
//! fresh from the live element on every event and never cached.

use somamap_core::{BodyMapError, ClientRect, ViewBox};

/// Errors that can occur when measuring an element.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// `window` is not available (not running in a browser).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("no document")]
    NoDocument,

    /// No element carries the requested id.
    #[error("element #{0} not found")]
    ElementNotFound(String),

    /// The element has no `viewBox` attribute.
    #[error("element #{0} has no viewBox")]
    MissingViewBox(String),

    /// The `viewBox` attribute could not be parsed.
    #[error(transparent)]
    ViewBox(#[from] BodyMapError),
}

/// Look up an element by id in the current document.
///
/// # Errors
///
/// Returns [`DomError`] if there is no window or document, or no element
/// with `id`.
pub fn element_by_id(id: &str) -> Result<web_sys::Element, DomError> {
    let document = web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::ElementNotFound(id.to_owned()))
}

/// Current on-screen rectangle and parsed `viewBox` of the `<svg>` with `id`.
///
/// # Errors
///
/// Returns [`DomError`] if the element cannot be found or its `viewBox`
/// is missing or malformed.
pub fn measure_svg(id: &str) -> Result<(ClientRect, ViewBox), DomError> {
    let element = element_by_id(id)?;
    let dom_rect = element.get_bounding_client_rect();
    let rect = ClientRect {
        left: dom_rect.left(),
        top: dom_rect.top(),
        width: dom_rect.width(),
        height: dom_rect.height(),
    };
    let view_box = element
        .get_attribute("viewBox")
        .ok_or_else(|| DomError::MissingViewBox(id.to_owned()))?
        .parse::<ViewBox>()?;
    Ok((rect, view_box))
}

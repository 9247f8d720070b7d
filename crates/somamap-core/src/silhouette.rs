//! Body outline drawn underneath the overlay.

use crate::types::ViewId;

const OUTLINE: &str = "M100 5 C108.3 5 115 12.4 115 21.5 C115 30.6 108.3 38 100 38 \
C91.7 38 85 30.6 85 21.5 C85 12.4 91.7 5 100 5 Z \
M92 38 L92 46 L72 48 L62 56 L58 80 L54 100 L48 120 L44 136 L40 148 L46 158 \
L56 156 L60 138 L66 116 L72 98 L76 74 L82 100 L80 134 L79 180 L80 204 L78 224 \
L76 234 L98 236 L99 222 L99 196 L99 170 L100 140 L101 170 L101 196 L101 222 \
L102 236 L124 234 L122 224 L120 204 L121 180 L120 134 L118 100 L124 74 L128 98 \
L134 116 L140 138 L144 156 L154 158 L160 148 L156 136 L152 120 L146 100 L142 80 \
L138 56 L128 48 L108 46 L108 38 Z";

const FRONT_DETAIL: &str = "M88 62 Q100 68 112 62 M100 104 L100 106";
const BACK_DETAIL: &str = "M100 48 L100 118 M88 58 Q92 70 96 62 M112 58 Q108 70 104 62";

/// Filled outline of the body in design space.
///
/// Both views share the same outline; they differ only in their
/// [`silhouette_detail_path`].
#[must_use]
pub const fn silhouette_path(_view: ViewId) -> &'static str {
    OUTLINE
}

/// Stroked inner lines (collarbones, navel, spine, shoulder blades).
#[must_use]
pub const fn silhouette_detail_path(view: ViewId) -> &'static str {
    match view {
        ViewId::Front => FRONT_DETAIL,
        ViewId::Back => BACK_DETAIL,
    }
}

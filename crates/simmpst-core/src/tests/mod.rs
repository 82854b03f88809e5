mod properties;

use crate::BurmeseConverter;

pub(super) fn converter() -> BurmeseConverter {
    BurmeseConverter::with_default_map()
}

pub(crate) const DASHBOARD: &[u8] =
    include_bytes!("../../../assets/svg/dashboard.svg");
pub(crate) const CART: &[u8] = include_bytes!("../../../assets/svg/cart.svg");
pub(crate) const USERS: &[u8] =
    include_bytes!("../../../assets/svg/users.svg");
pub(crate) const CHART: &[u8] =
    include_bytes!("../../../assets/svg/chart.svg");
pub(crate) const SETTINGS: &[u8] =
    include_bytes!("../../../assets/svg/settings.svg");
pub(crate) const CARD: &[u8] = include_bytes!("../../../assets/svg/card.svg");
pub(crate) const FILE: &[u8] = include_bytes!("../../../assets/svg/file.svg");
pub(crate) const BOX: &[u8] = include_bytes!("../../../assets/svg/box.svg");
pub(crate) const CHEVRON_RIGHT: &[u8] =
    include_bytes!("../../../assets/svg/chevron-right.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../../../assets/svg/chevron-down.svg");
pub(crate) const DRAG_HANDLE: &[u8] =
    include_bytes!("../../../assets/svg/grip.svg");
pub(crate) const SIDEBAR_COLLAPSE: &[u8] =
    include_bytes!("../../../assets/svg/sidebar-collapse.svg");
pub(crate) const SIDEBAR_EXPAND: &[u8] =
    include_bytes!("../../../assets/svg/sidebar-expand.svg");
pub(crate) const LOGOUT: &[u8] =
    include_bytes!("../../../assets/svg/logout.svg");
pub(crate) const LOCK: &[u8] = include_bytes!("../../../assets/svg/lock.svg");
pub(crate) const LOGO_SMALL: &[u8] =
    include_bytes!("../../../assets/svg/logo-small.svg");
pub(crate) const APP_ICON_DATA: &[u8] =
    include_bytes!("../../../assets/logo/logo-small.png");

/// Resolve an icon key from the catalog to embedded SVG data.
pub(crate) fn by_key(key: &str) -> Option<&'static [u8]> {
    let icon = match key {
        "dashboard" => DASHBOARD,
        "cart" => CART,
        "users" => USERS,
        "chart" => CHART,
        "settings" => SETTINGS,
        "card" => CARD,
        "file" => FILE,
        "box" => BOX,
        _ => return None,
    };

    Some(icon)
}

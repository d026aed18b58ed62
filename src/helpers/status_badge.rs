use crate::enums::badge_style::BadgeStyle;

/// Badge colour for the Vietnamese status labels used by leave, overtime, task and
/// project lists.
pub fn badge_for(status: &str) -> BadgeStyle {
    match status.trim() {
        "Đã duyệt" | "Duyệt" | "Hoàn thành" => BadgeStyle::Success,
        "Chờ duyệt" => BadgeStyle::Warning,
        "Từ chối" => BadgeStyle::Danger,
        "Đang thực hiện" => BadgeStyle::Primary,
        _ => BadgeStyle::Secondary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_statuses() {
        assert_eq!(badge_for("Đã duyệt"), BadgeStyle::Success);
        assert_eq!(badge_for("Duyệt"), BadgeStyle::Success);
        assert_eq!(badge_for("Chờ duyệt"), BadgeStyle::Warning);
        assert_eq!(badge_for("Từ chối"), BadgeStyle::Danger);
        assert_eq!(badge_for("Đang thực hiện"), BadgeStyle::Primary);
        assert_eq!(badge_for("Mới giao"), BadgeStyle::Secondary);
    }
}

use dioxus::prelude::*;

use crate::components::icons::TrophyIcon;
use crate::services::Achievement;
use crate::utils::format_earned_date;

/// Display data for one achievement row
#[derive(Clone, Debug, PartialEq)]
pub struct AchievementRow {
    /// Achievement id, unique within the profile
    pub key: String,
    pub name: String,
    pub description: String,
    /// Raw date, kept for the `<time datetime>` attribute
    pub earned_date: String,
    /// Locale-formatted date shown to the user
    pub earned_display: String,
}

/// One row per achievement, in the order the profile lists them
pub fn achievement_rows(achievements: &[Achievement]) -> Vec<AchievementRow> {
    achievements
        .iter()
        .map(|a| AchievementRow {
            key: a.id.clone(),
            name: a.name.clone(),
            description: a.description.clone(),
            earned_date: a.earned_date.clone(),
            earned_display: format_earned_date(&a.earned_date),
        })
        .collect()
}

#[component]
pub fn AchievementsPanel(achievements: Vec<Achievement>) -> Element {
    let rows = achievement_rows(&achievements);

    rsx! {
        section {
            class: "bg-card border border-border rounded-xl p-6",
            h2 {
                class: "text-2xl font-bold mb-4 flex items-center gap-2",
                TrophyIcon { class: "w-6 h-6" }
                "Recent Achievements"
            }
            div {
                class: "space-y-4",
                for row in rows {
                    AchievementItem { key: "{row.key}", row }
                }
            }
        }
    }
}

#[component]
fn AchievementItem(row: AchievementRow) -> Element {
    rsx! {
        div {
            class: "p-3 bg-muted rounded-lg",
            div {
                class: "flex justify-between items-start gap-4",
                div {
                    h3 {
                        class: "font-semibold",
                        "{row.name}"
                    }
                    p {
                        class: "text-sm opacity-70",
                        "{row.description}"
                    }
                }
                time {
                    class: "text-sm opacity-70 whitespace-nowrap",
                    datetime: "{row.earned_date}",
                    "{row.earned_display}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(id: &str, name: &str, date: &str) -> Achievement {
        Achievement {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            earned_date: date.to_string(),
        }
    }

    #[test]
    fn test_achievement_rows_keep_input_order() {
        let achievements = vec![
            achievement("7", "Sharpshooter", "2024-05-01"),
            achievement("2", "Social Butterfly", "2024-03-16"),
            achievement("5", "Early Adopter", "2024-03-15"),
        ];
        let rows = achievement_rows(&achievements);

        assert_eq!(rows.len(), 3);
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["7", "2", "5"]);
        assert_eq!(rows[1].name, "Social Butterfly");
        assert_eq!(rows[1].description, "Social Butterfly description");
    }

    #[test]
    fn test_achievement_rows_format_dates() {
        let rows = achievement_rows(&[achievement("1", "Early Adopter", "2024-03-15")]);
        assert_eq!(rows[0].earned_date, "2024-03-15");
        assert_eq!(rows[0].earned_display, "3/15/2024");
    }
}

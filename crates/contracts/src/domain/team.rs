use serde::{Deserialize, Serialize};

/// Участник команды на странице ролей. `is_active` переключается только
/// локально.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
    pub is_active: bool,
}

/// Переключает активность участника, возвращает новое значение.
pub fn toggle_active(members: &mut [TeamMember], id: &str) -> Option<bool> {
    let member = members.iter_mut().find(|m| m.id == id)?;
    member.is_active = !member.is_active;
    Some(member.is_active)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_only_target() {
        let mut members = vec![
            TeamMember {
                id: "tm1".to_string(),
                name: "Иван Петров".to_string(),
                email: "ivan@example.com".to_string(),
                role: "Администратор".to_string(),
                permissions: vec!["Просмотр".to_string(), "Редактирование".to_string()],
                is_active: true,
            },
            TeamMember {
                id: "tm2".to_string(),
                name: "Анна Сидорова".to_string(),
                email: "anna@example.com".to_string(),
                role: "Оператор".to_string(),
                permissions: vec!["Просмотр".to_string()],
                is_active: false,
            },
        ];
        assert_eq!(toggle_active(&mut members, "tm1"), Some(false));
        assert!(!members[0].is_active);
        assert!(!members[1].is_active);
        assert_eq!(toggle_active(&mut members, "missing"), None);
    }
}

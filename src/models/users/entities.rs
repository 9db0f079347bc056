use serde::{Deserialize, Serialize};

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RoleName {
    Admin,   // 管理员
    Teacher, // 教师
    Student, // 学生
}

impl RoleName {
    pub const ADMIN: &'static str = "admin";
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";

    pub fn admin_roles() -> &'static [&'static RoleName] {
        &[&Self::Admin]
    }
    pub fn staff_roles() -> &'static [&'static RoleName] {
        &[&Self::Admin, &Self::Teacher]
    }
    pub fn enrollment_roles() -> &'static [&'static RoleName] {
        &[&Self::Admin, &Self::Student]
    }
    pub fn all_roles() -> &'static [&'static RoleName] {
        &[&Self::Admin, &Self::Teacher, &Self::Student]
    }
}

impl<'de> Deserialize<'de> for RoleName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            RoleName::ADMIN => Ok(RoleName::Admin),
            RoleName::TEACHER => Ok(RoleName::Teacher),
            RoleName::STUDENT => Ok(RoleName::Student),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: admin, teacher, student"
            ))),
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleName::Admin => write!(f, "{}", RoleName::ADMIN),
            RoleName::Teacher => write!(f, "{}", RoleName::TEACHER),
            RoleName::Student => write!(f, "{}", RoleName::STUDENT),
        }
    }
}

impl std::str::FromStr for RoleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(RoleName::Admin),
            "teacher" => Ok(RoleName::Teacher),
            "student" => Ok(RoleName::Student),
            _ => Err(format!("Invalid role name: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub roles: Vec<RoleName>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    /// 判断用户是否拥有指定角色
    pub fn has_role(&self, role: &RoleName) -> bool {
        self.roles.contains(role)
    }

    /// 判断用户是否拥有任一指定角色
    pub fn has_any_role(&self, roles: &[&RoleName]) -> bool {
        roles.iter().any(|role| self.roles.contains(role))
    }

    pub fn role_strings(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.to_string()).collect()
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role_strings(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [RoleName::Admin, RoleName::Teacher, RoleName::Student] {
            let parsed = role.to_string().parse::<RoleName>().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("principal".parse::<RoleName>().is_err());
    }

    #[test]
    fn test_has_any_role() {
        let user = User {
            id: 1,
            username: "teacher01".into(),
            email: "teacher01@example.com".into(),
            password_hash: String::new(),
            full_name: "Teacher One".into(),
            phone: None,
            avatar_url: None,
            is_active: true,
            roles: vec![RoleName::Teacher],
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert!(user.has_any_role(RoleName::staff_roles()));
        assert!(!user.has_any_role(RoleName::admin_roles()));
    }
}

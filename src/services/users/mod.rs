pub mod activate;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::entities::RoleName;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建用户
    pub async fn create_user(
        &self,
        request: &HttpRequest,
        user: CreateUserRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, request, user).await
    }

    // 更新用户信息
    pub async fn update_user(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateUserRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, request, id, update).await
    }

    // 删除用户
    pub async fn delete_user(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, request, id).await
    }

    // 通过ID查询用户
    pub async fn get_user(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::handle_get(self, request, id).await
    }

    // 列出用户
    pub async fn list_users(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list(self, request).await
    }

    // 按角色列出用户
    pub async fn list_by_role(
        &self,
        request: &HttpRequest,
        role: RoleName,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_role(self, request, role).await
    }

    // 启用用户
    pub async fn activate_user(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        activate::handle_set_active(self, request, id, true).await
    }

    // 停用用户
    pub async fn deactivate_user(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        activate::handle_set_active(self, request, id, false).await
    }
}

//! Root and health endpoints, present in every project.

use crate::{
    Fragment,
    ast::{Function, Route},
};

pub fn endpoints(project_name: &str) -> Fragment {
    Fragment::empty()
        .define(
            Function::endpoint("root", Route::get("/"))
                .doc("Root endpoint")
                .body(&format!(
                    r#"return {{"message": "Welcome to {} API", "version": "1.0.0"}}"#,
                    project_name
                )),
        )
        .define(
            Function::endpoint("health_check", Route::get("/health"))
                .doc("Health check endpoint")
                .body(&format!(
                    r#"return {{"status": "healthy", "service": "{}"}}"#,
                    project_name
                )),
        )
}

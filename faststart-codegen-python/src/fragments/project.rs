//! Project-type specific endpoints.

use faststart_config::ProjectType;

use crate::{
    Fragment,
    ast::{Function, Param, Route},
};

/// Endpoints appended after root/health for the given project type.
///
/// `current_user` is the authenticated-user dependency, present only when
/// authentication is enabled.
pub fn endpoints(
    project_type: ProjectType,
    project_name: &str,
    current_user: Option<Param>,
) -> Fragment {
    match project_type {
        ProjectType::MlApi => ml_api(current_user),
        ProjectType::Microservice => microservice(project_name, current_user),
        // Generic and kinds added later contribute nothing.
        _ => Fragment::empty(),
    }
}

fn ml_api(current_user: Option<Param>) -> Fragment {
    Fragment::empty()
        .define(
            Function::endpoint("predict", Route::post("/predict"))
                .param(Param::typed("input_data", "dict"))
                .param_opt(current_user.clone())
                .doc("Make ML prediction")
                .body(
                    r#"from app.services.prediction_service import make_prediction
try:
    result = await make_prediction(input_data)
    return {"prediction": result, "status": "success"}
except Exception as e:
    raise HTTPException(status_code=400, detail=str(e))"#,
                ),
        )
        .define(
            Function::endpoint("get_model_info", Route::get("/model/info"))
                .split()
                .param_opt(current_user)
                .doc("Get ML model information")
                .body(
                    r#"return {
    "model_name": "DefaultModel",
    "version": "1.0.0",
    "description": "Machine Learning model for predictions"
}"#,
                ),
        )
}

fn microservice(project_name: &str, current_user: Option<Param>) -> Fragment {
    Fragment::empty()
        .define(
            Function::endpoint("service_status", Route::get("/status"))
                .doc("Get service status")
                .body(&format!(
                    r#"return {{
    "service": "{}",
    "status": "running",
    "version": "1.0.0"
}}"#,
                    project_name
                )),
        )
        .define(
            Function::endpoint("process_data", Route::post("/process"))
                .param(Param::typed("data", "dict"))
                .param_opt(current_user)
                .doc("Process data")
                // Imported locally: the service function shadows this handler's name.
                .body(
                    r#"from app.services.processing_service import process_data
try:
    result = await process_data(data)
    return {"result": result, "status": "processed"}
except Exception as e:
    raise HTTPException(status_code=400, detail=str(e))"#,
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PyFile;

    fn render(project_type: ProjectType, current_user: Option<Param>) -> String {
        PyFile::new()
            .merge(endpoints(project_type, "svc", current_user))
            .render()
    }

    #[test]
    fn test_generic_is_empty() {
        assert!(endpoints(ProjectType::Generic, "svc", None).is_empty());
    }

    #[test]
    fn test_ml_api_routes() {
        let code = render(ProjectType::MlApi, None);
        assert!(code.contains("@router.post(\"/predict\")"));
        assert!(code.contains("@router.get(\"/model/info\")"));
        assert!(code.contains("async def predict(input_data: dict):"));
        assert!(code.contains("async def get_model_info():"));
        assert!(!code.contains("/status"));
    }

    #[test]
    fn test_microservice_routes() {
        let code = render(ProjectType::Microservice, None);
        assert!(code.contains("@router.get(\"/status\")"));
        assert!(code.contains("@router.post(\"/process\")"));
        assert!(code.contains("\"service\": \"svc\""));
        assert!(!code.contains("/predict"));
    }

    #[test]
    fn test_current_user_param_splits_signature() {
        let user = Param::typed("current_user", "User").default("Depends(get_current_user)");
        let code = render(ProjectType::MlApi, Some(user));

        assert!(code.contains(
            "async def predict(\n    input_data: dict,\n    current_user: User = Depends(get_current_user)\n):"
        ));
        assert!(code.contains(
            "async def get_model_info(\n    current_user: User = Depends(get_current_user)\n):"
        ));
    }
}

use std::sync::Arc;

use tokio::time::timeout;
use tracing::{error, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::AnalysisResponse,
        normalizer::extract,
        ports::{FoodAnalysisService, LLMClient},
        prompt::FOOD_ANALYSIS_PROMPT,
        value_objects::{AnalyzeFoodImageInput, ImageMediaType},
    },
};

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    fn configured_client(&self) -> Result<&Arc<LLM>, CoreError> {
        self.llm_client
            .as_ref()
            .ok_or_else(|| CoreError::ServiceUnavailable {
                provider: self.provider_name.clone(),
            })
    }

    async fn call_model(
        &self,
        llm_client: &LLM,
        input: AnalyzeFoodImageInput,
    ) -> Result<String, CoreError> {
        let call = llm_client.generate_with_image(
            FOOD_ANALYSIS_PROMPT.to_string(),
            input.image_data,
            input.media_type.as_str().to_string(),
            self.generation,
        );

        let raw_response = timeout(self.timeout, call)
            .await
            .map_err(|_| CoreError::Timeout(self.timeout))??;

        let raw_response = raw_response.trim();
        if raw_response.is_empty() {
            return Err(CoreError::EmptyResponse {
                provider: self.provider_name.clone(),
            });
        }

        Ok(raw_response.to_string())
    }
}

impl<LLM> FoodAnalysisService for Service<LLM>
where
    LLM: LLMClient,
{
    fn ensure_configured(&self) -> Result<(), CoreError> {
        self.configured_client().map(|_| ())
    }

    fn validate_media_type(
        &self,
        content_type: Option<&str>,
    ) -> Result<ImageMediaType, CoreError> {
        ImageMediaType::parse(content_type)
    }

    async fn analyze_food_image(
        &self,
        input: AnalyzeFoodImageInput,
    ) -> Result<AnalysisResponse, CoreError> {
        let llm_client = self.configured_client()?;

        let file_name = input.file_name.clone().unwrap_or_default();
        let media_type = input.media_type.as_str().to_string();
        let size_bytes = input.image_data.len();

        if size_bytes == 0 {
            let e = CoreError::AnalysisFailed("Empty image payload".to_string());
            error!(
                error = %e,
                file_name = %file_name,
                media_type = %media_type,
                "Rejecting empty food image"
            );
            return Err(e);
        }

        let raw_response = self.call_model(llm_client, input).await.map_err(|e| {
            error!(
                error = %e,
                file_name = %file_name,
                media_type = %media_type,
                "Error analyzing food image"
            );
            CoreError::AnalysisFailed(e.to_string())
        })?;

        let normalized = extract(&raw_response);
        let parsed = normalized.is_parsed();
        let report = normalized.into_report_or_default();

        info!(
            file_name = %file_name,
            media_type = %media_type,
            size_bytes,
            parsed,
            food_name = %report.food_name,
            "Food image analyzed"
        );

        Ok(AnalysisResponse::new(self.provider_name.clone(), report))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    use super::*;
    use crate::domain::{
        common::{GenerationParams, LLMConfig},
        food_analysis::entities::FoodReport,
    };

    const APPLE: &str = r#"{"food_name":"Apple","calories":"95 kcal","protein":"0.5g","carbs":"25g","fats":"0.3g","fiber":"4g","pregnancy_safe":true,"period_friendly":true,"recommendations":"Good snack.","suggested_foods":["banana","pear"]}"#;

    #[derive(Clone, Debug)]
    enum Reply {
        Text(String),
        Fail(String),
        Hang,
    }

    #[derive(Clone, Debug)]
    struct StubLLMClient {
        reply: Reply,
        calls: Arc<AtomicUsize>,
        last_call: Arc<Mutex<Option<(String, String, GenerationParams)>>>,
    }

    impl StubLLMClient {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Arc::new(AtomicUsize::new(0)),
                last_call: Arc::new(Mutex::new(None)),
            }
        }
    }

    impl LLMClient for StubLLMClient {
        async fn generate_with_image(
            &self,
            prompt: String,
            _image_data: Vec<u8>,
            mime_type: String,
            params: GenerationParams,
        ) -> Result<String, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_call.lock().unwrap() = Some((prompt, mime_type, params));

            match &self.reply {
                Reply::Text(text) => Ok(text.clone()),
                Reply::Fail(message) => Err(CoreError::ExternalServiceError(message.clone())),
                Reply::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(String::new())
                }
            }
        }
    }

    fn service_with(stub: Option<StubLLMClient>) -> Service<StubLLMClient> {
        let config = LLMConfig {
            timeout: Duration::from_secs(30),
            ..LLMConfig::default()
        };
        Service::new(stub, &config)
    }

    fn png_upload() -> AnalyzeFoodImageInput {
        AnalyzeFoodImageInput {
            file_name: Some("apple.png".to_string()),
            media_type: ImageMediaType::parse(Some("image/png")).unwrap(),
            image_data: vec![0x89, b'P', b'N', b'G'],
        }
    }

    #[tokio::test]
    async fn returns_the_parsed_report_with_the_provider_as_source() {
        let stub = StubLLMClient::new(Reply::Text(format!("```json\n{APPLE}\n```")));
        let service = service_with(Some(stub.clone()));

        let response = service.analyze_food_image(png_upload()).await.unwrap();

        assert!(response.success);
        assert_eq!(response.source, "Gemini");
        assert_eq!(response.report.food_name, "Apple");
        assert_eq!(response.report.suggested_foods, vec!["banana", "pear"]);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn sends_prompt_media_type_and_generation_params() {
        let stub = StubLLMClient::new(Reply::Text(APPLE.to_string()));
        let service = service_with(Some(stub.clone()));

        service.analyze_food_image(png_upload()).await.unwrap();

        let (prompt, mime_type, params) = stub.last_call.lock().unwrap().clone().unwrap();
        assert_eq!(prompt, FOOD_ANALYSIS_PROMPT);
        assert_eq!(mime_type, "image/png");
        assert_eq!(params, GenerationParams::default());
    }

    #[tokio::test]
    async fn unparseable_output_yields_the_placeholder_report() {
        let stub = StubLLMClient::new(Reply::Text("I cannot analyze this image".to_string()));
        let service = service_with(Some(stub));

        let response = service.analyze_food_image(png_upload()).await.unwrap();

        assert!(response.success);
        assert_eq!(response.report, FoodReport::unrecognized());
    }

    #[tokio::test]
    async fn missing_client_is_service_unavailable() {
        let service = service_with(None);

        assert!(matches!(
            service.ensure_configured(),
            Err(CoreError::ServiceUnavailable { .. })
        ));

        let err = service.analyze_food_image(png_upload()).await.unwrap_err();
        assert_eq!(err.to_string(), "Gemini AI not configured.");
    }

    #[tokio::test]
    async fn model_errors_become_analysis_failures() {
        let stub = StubLLMClient::new(Reply::Fail("connection refused".to_string()));
        let service = service_with(Some(stub));

        let err = service.analyze_food_image(png_upload()).await.unwrap_err();

        assert!(matches!(err, CoreError::AnalysisFailed(_)));
        assert_eq!(err.to_string(), "Food analysis failed: connection refused");
    }

    #[tokio::test]
    async fn blank_model_output_is_an_analysis_failure() {
        let stub = StubLLMClient::new(Reply::Text("  \n ".to_string()));
        let service = service_with(Some(stub));

        let err = service.analyze_food_image(png_upload()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Food analysis failed: Empty analysis response from Gemini API"
        );
    }

    #[tokio::test]
    async fn empty_upload_is_rejected_without_calling_the_model() {
        let stub = StubLLMClient::new(Reply::Text(APPLE.to_string()));
        let service = service_with(Some(stub.clone()));
        let input = AnalyzeFoodImageInput {
            image_data: Vec::new(),
            ..png_upload()
        };

        let err = service.analyze_food_image(input).await.unwrap_err();

        assert!(matches!(err, CoreError::AnalysisFailed(_)));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[tokio::test]
    async fn empty_upload_is_logged_with_context() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let service = service_with(Some(StubLLMClient::new(Reply::Text(APPLE.to_string()))));
        let input = AnalyzeFoodImageInput {
            image_data: Vec::new(),
            ..png_upload()
        };

        service.analyze_food_image(input).await.unwrap_err();

        let output = logs.contents();
        assert!(output.contains("ERROR"), "{output}");
        assert!(output.contains("Rejecting empty food image"), "{output}");
        assert!(output.contains("apple.png"), "{output}");
        assert!(output.contains("image/png"), "{output}");
    }

    #[tokio::test(start_paused = true)]
    async fn slow_model_times_out() {
        let stub = StubLLMClient::new(Reply::Hang);
        let service = service_with(Some(stub));

        let err = service.analyze_food_image(png_upload()).await.unwrap_err();

        assert!(matches!(err, CoreError::AnalysisFailed(_)));
        assert!(err.to_string().starts_with("Food analysis failed: model call timed out"));
    }

    #[test]
    fn validates_media_type_before_any_call() {
        let stub = StubLLMClient::new(Reply::Text(APPLE.to_string()));
        let service = service_with(Some(stub.clone()));

        assert!(matches!(
            service.validate_media_type(Some("application/pdf")),
            Err(CoreError::InvalidFileType)
        ));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }
}

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Translator;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    source_lang: String,
    target_lang: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

/// Client for the DeepL `v2/translate` endpoint.
pub struct DeeplClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl DeeplClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    fn url(&self) -> String {
        format!("{}/v2/translate", self.endpoint.trim_end_matches('/'))
    }
}

impl Translator for DeeplClient {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let url = self.url();

        let request = TranslateRequest {
            text: [text],
            source_lang: deepl_language_code(source_lang),
            target_lang: deepl_language_code(target_lang),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        let body: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        body.translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .context("Translation response contained no translations")
    }
}

/// DeepL expects upper-case language codes (`de` becomes `DE`, `pt-br` becomes `PT-BR`).
fn deepl_language_code(lang: &str) -> String {
    lang.trim().to_ascii_uppercase()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_deepl_language_code() {
        assert_eq!(deepl_language_code("de"), "DE");
        assert_eq!(deepl_language_code("en-gb"), "EN-GB");
        assert_eq!(deepl_language_code(" fr "), "FR");
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let client = DeeplClient::new("https://api-free.deepl.com/".to_string(), "k".to_string());
        assert_eq!(client.url(), "https://api-free.deepl.com/v2/translate");
    }

    #[tokio::test]
    async fn test_translate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .and(header("Authorization", "DeepL-Auth-Key test-key"))
            .and(body_json(serde_json::json!({
                "text": ["Hallo"],
                "source_lang": "DE",
                "target_lang": "FR"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translations": [{"detected_source_language": "DE", "text": "Bonjour"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DeeplClient::new(server.uri(), "test-key".to_string());
        let translated = client.translate("Hallo", "de", "fr").await.unwrap();

        assert_eq!(translated, "Bonjour");
    }

    #[tokio::test]
    async fn test_translate_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .respond_with(ResponseTemplate::new(456).set_body_string("Quota exceeded"))
            .mount(&server)
            .await;

        let client = DeeplClient::new(server.uri(), "test-key".to_string());
        let err = client.translate("Hallo", "de", "fr").await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("456"));
        assert!(message.contains("Quota exceeded"));
    }

    #[tokio::test]
    async fn test_translate_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"translations": []})),
            )
            .mount(&server)
            .await;

        let client = DeeplClient::new(server.uri(), "test-key".to_string());
        let err = client.translate("Hallo", "de", "fr").await.unwrap_err();

        assert!(err.to_string().contains("no translations"));
    }

    #[tokio::test]
    async fn test_translate_unreachable_endpoint() {
        let client = DeeplClient::new("http://127.0.0.1:9".to_string(), "k".to_string());
        let err = client.translate("Hallo", "de", "fr").await.unwrap_err();

        assert!(err.to_string().contains("Failed to connect"));
    }
}

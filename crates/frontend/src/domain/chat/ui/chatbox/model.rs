//! ChatBox - Model (API functions)

use contracts::domain::chat::api::{failure_reason, AskResponse};

use crate::shared::api_utils::upload_url;

/// Отправить вопрос (и при необходимости вложение) сервису
///
/// The body is a multipart form: the optional `file` part first, then the
/// `question` text. Returns the answer text, or a display-ready failure
/// reason.
pub async fn ask(question: &str, file: Option<&web_sys::File>) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    if let Some(file) = file {
        form_data
            .append_with_blob("file", file)
            .map_err(|e| format!("{e:?}"))?;
    }
    form_data
        .append_with_str("question", question)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    // No explicit Content-Type: the browser supplies the multipart boundary.
    opts.set_body(&form_data);

    let request =
        Request::new_with_str_and_init(&upload_url(), &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        return Err(failure_reason(&text));
    }

    let data: AskResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data.answer)
}

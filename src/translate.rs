// src/translate.rs
//
// Vietnamese → English translation behind a one-method trait.
//
// `HostedModel` is the production handle: the Marian vi→en model served by an
// inference endpoint. `load` is the expensive step (it blocks until the model
// is warm) and happens once at startup; the handle is then passed to every
// lookup. A failed call fails that one request only.

use reqwest::{StatusCode, blocking::Client};
use serde::{Deserialize, Serialize};

use crate::{
    config::{consts::WARMUP_TEXT, options::TranslatorOptions},
    core::net,
    error::{Error, Result},
};

pub trait Translate {
    fn translate(&self, text: &str) -> Result<String>;
}

/// Any `Fn(&str) -> Result<String>` is a translator (handy for stubs).
impl<F> Translate for F
where
    F: Fn(&str) -> Result<String>,
{
    fn translate(&self, text: &str) -> Result<String> {
        self(text)
    }
}

#[derive(Serialize)]
struct Request<'a> {
    inputs: &'a str,
    options: RequestOptions,
}

#[derive(Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct Translation {
    translation_text: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Response {
    Ok(Vec<Translation>),
    Failed { error: String },
}

pub struct HostedModel {
    client: Client,
    url: String,
    model_id: String,
    token: Option<String>,
}

impl HostedModel {
    /// Build the handle and warm the model up. Fails if the model can't be reached.
    pub fn load(opts: &TranslatorOptions) -> Result<Self> {
        let client = net::build_client().map_err(|e| Error::Translate(e.to_string()))?;
        let model = Self {
            client,
            url: opts.model_url(),
            model_id: opts.model_id.clone(),
            token: opts.token.clone(),
        };

        logf!("Model: loading {} ({})", model.model_id, model.url);
        model.call(WARMUP_TEXT)?;
        logf!("Model: ready {}", model.model_id);
        Ok(model)
    }

    fn call(&self, text: &str) -> Result<String> {
        let body = Request {
            inputs: text,
            options: RequestOptions { wait_for_model: true },
        };

        let mut req = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().map_err(|e| Error::Translate(e.to_string()))?;
        let status = resp.status();
        let raw = resp.text().map_err(|e| Error::Translate(e.to_string()))?;
        parse_response(status, &raw)
    }
}

fn parse_response(status: StatusCode, raw: &str) -> Result<String> {
    match serde_json::from_str::<Response>(raw) {
        Ok(Response::Ok(list)) if status.is_success() => list
            .into_iter()
            .next()
            .map(|t| t.translation_text)
            .ok_or_else(|| Error::Translate(s!("model returned no translation"))),
        Ok(Response::Failed { error }) => Err(Error::Translate(format!("HTTP {status}: {error}"))),
        _ if !status.is_success() => Err(Error::Translate(format!("HTTP {status}"))),
        Ok(Response::Ok(_)) => Err(Error::Translate(s!("unexpected response"))),
        Err(e) => Err(Error::Translate(format!("bad response body: {e}"))),
    }
}

impl Translate for HostedModel {
    fn translate(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(s!());
        }
        self.call(text).inspect_err(|e| loge!("Model: {}", e))
    }
}

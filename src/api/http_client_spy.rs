//! Scriptable [`HttpClient`] double for unit tests.
//!
//! Records every requested URL and holds on to its completion until the
//! test decides how the request ends.
use super::{HttpClient, HttpClientCompletion, HttpClientError, HttpClientResult, HttpResponse};
use reqwest::StatusCode;
use std::sync::Mutex;
use url::Url;

struct Message {
    url: Url,
    completion: Option<HttpClientCompletion>,
}

#[derive(Default)]
pub(crate) struct HttpClientSpy {
    messages: Mutex<Vec<Message>>,
}

impl HttpClientSpy {
    pub(crate) fn requested_urls(&self) -> Vec<Url> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.url.clone())
            .collect()
    }

    pub(crate) fn complete_with_error(&self, error: HttpClientError, index: usize) {
        self.complete(index, HttpClientResult::Failure(error));
    }

    pub(crate) fn complete_with_status(&self, code: u16, data: Vec<u8>, index: usize) {
        let url = self.requested_urls()[index].clone();
        let response = HttpResponse::new(StatusCode::from_u16(code).unwrap(), url);
        self.complete(
            index,
            HttpClientResult::Success {
                body: data,
                response,
            },
        );
    }

    fn complete(&self, index: usize, result: HttpClientResult) {
        // Take the completion out first so it runs without the lock held
        let completion = self.messages.lock().unwrap()[index]
            .completion
            .take()
            .expect("request already completed");
        completion(result);
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        self.messages.lock().unwrap().push(Message {
            url: url.clone(),
            completion: Some(completion),
        });
    }
}

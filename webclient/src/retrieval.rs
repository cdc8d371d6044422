use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::*,
    http::{RequestBuilder, StatusCode},
    resource::{Resource, Submittable},
    session::Session,
    util,
};

const APPLICATION_JSON: &str = "application/json";

/// Error body sent by the API along with a non-200 status.
#[derive(Debug, Deserialize)]
struct ApiError {
    code: i64,
    message: String,
}

impl Session {
    /// Retrieves every object of `R`.
    ///
    /// If one element fails to decode, the elements before it are returned
    /// together with the error.
    pub async fn list<R: Resource>(&self) -> ::std::result::Result<Vec<R>, PartialList<R>> {
        let url = self.resource_url::<R>("").map_err(PartialList::empty)?;
        let body = self
            .exchange(self.get(&url), &url)
            .await
            .map_err(PartialList::empty)?;
        decode_list(&body)
    }

    /// Retrieves one object of `R`. Only singletons such as the scoreboard
    /// accept an empty `id`.
    pub async fn get_by_id<R: Resource>(&self, id: &str) -> Result<R> {
        if id.is_empty() && !R::SINGLETON {
            return Err(Error::EmptyId { resource: R::NAME });
        }
        let url = self.resource_url::<R>(id)?;
        self.fetch_one(&url).await
    }

    /// Posts `body` to the collection of `R` and decodes the created object.
    pub async fn post<R, B>(&self, body: &B) -> Result<R>
    where
        R: Resource,
        B: Serialize + Sync + ?Sized,
    {
        let url = self.resource_url::<R>("")?;
        let bytes = serde_json::to_vec(body).map_err(Error::Encode)?;
        let req = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .body(bytes);
        let body = self.exchange(req, &url).await?;
        decode_single(&body)
    }

    /// Posts an already assembled value to its own collection.
    pub async fn submit<S: Submittable>(&self, value: &S) -> Result<S> {
        self.post::<S, S>(value)
            .await
            .map_err(|e| e.context(format!("submit {}", S::NAME)))
    }

    pub(crate) async fn fetch_one<R: Resource>(&self, url: &Url) -> Result<R> {
        let body = self.exchange(self.get(url), url).await?;
        decode_single(&body)
    }

    /// `{base}/[contests/{cid}/]{R::PATH}[/{id}]`
    pub(crate) fn resource_url<R: Resource>(&self, id: &str) -> Result<Url> {
        if !R::CONTEST_SCOPED {
            return Ok(util::join_segments(&self.base_url, [R::PATH, id]));
        }
        self.contest_url(R::PATH, [R::PATH, id])
    }

    /// URL below `contests/{cid}/`. `path` only names the request in errors.
    pub(crate) fn contest_url<'a>(
        &'a self,
        path: &'static str,
        tail: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url> {
        let cid = match &self.contest_id {
            Some(cid) if !cid.is_empty() => cid.as_str(),
            _ => return Err(Error::ContestNotBound { path }),
        };
        let segments = ["contests", cid].into_iter().chain(tail);
        Ok(util::join_segments(&self.base_url, segments))
    }

    fn get(&self, url: &Url) -> RequestBuilder {
        self.http.get(url.clone()).header(ACCEPT, APPLICATION_JSON)
    }

    /// Sends `req` and returns the body of a 200 response.
    /// The body is read to the end in every case so the connection can be reused.
    async fn exchange(&self, req: RequestBuilder, url: &Url) -> Result<Vec<u8>> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.bytes().await;
        if status != StatusCode::OK {
            let raw = body.as_ref().map(|b| &b[..]).unwrap_or_default();
            return Err(status_to_error(status, url, raw));
        }
        Ok(body?.to_vec())
    }
}

pub(crate) fn status_to_error(status: StatusCode, url: &Url, body: &[u8]) -> Error {
    let requested_url = url.to_string();
    match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized { requested_url },
        StatusCode::NOT_FOUND => Error::NotFound { requested_url },
        _ => Error::UnexpectedResponseCode {
            status,
            requested_url,
            message: error_message(body),
        },
    }
}

fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ApiError>(body) {
        Ok(e) => format!("{} (error code {})", e.message, e.code),
        Err(_) => String::from_utf8_lossy(body).trim().to_owned(),
    }
}

pub(crate) fn decode_list<R: Resource>(body: &[u8]) -> ::std::result::Result<Vec<R>, PartialList<R>> {
    let items: Vec<serde_json::Value> = serde_json::from_slice(body).map_err(|source| {
        PartialList::empty(Error::Decode {
            resource: R::NAME,
            index: None,
            source,
        })
    })?;

    let mut decoded = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match R::decode_value(item, Some(i)) {
            Ok(x) => decoded.push(x),
            Err(error) => {
                log::warn!("Stopped decoding {} list at element #{}: {}", R::NAME, i, error);
                return Err(PartialList { decoded, error });
            }
        }
    }
    Ok(decoded)
}

/// Decodes a response that must describe exactly one object.
///
/// A JSON object is decoded directly. Some servers wrap single objects in an
/// array, which is accepted only when it holds exactly one element.
pub(crate) fn decode_single<R: Resource>(body: &[u8]) -> Result<R> {
    match body.iter().find(|b| !b.is_ascii_whitespace()) {
        None => Err(Error::UnexpectedObjectCount { got: 0 }),
        Some(b'[') => {
            let mut items = decode_list::<R>(body).map_err(Error::from)?;
            match items.len() {
                1 => Ok(items.remove(0)),
                got => Err(Error::UnexpectedObjectCount { got }),
            }
        }
        Some(b'n') if std::str::from_utf8(body).map(str::trim) == Ok("null") => {
            Err(Error::UnexpectedObjectCount { got: 0 })
        }
        Some(_) => R::decode(body),
    }
}

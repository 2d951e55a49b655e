use iced::Subscription;
use iced::futures::stream::{self, BoxStream};
use iced::futures::StreamExt;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use netwrangler_common::{ApiClient, ApiConfig, Error, FetchError};

use crate::message::Message;
use crate::mock;
use crate::poller::Poller;
use crate::scheduler::TokioScheduler;

/// Where a page's fetch cycles get their data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PollSource {
    /// API server and poll period.
    pub api: ApiConfig,
    /// Serve generated data instead of calling the API.
    pub demo: bool,
}

/// Poll the three operations center endpoints.
///
/// The poller lives as long as the subscription: when the page is left,
/// iced drops the stream, which stops the timer and aborts open requests.
pub fn operations_subscription(source: PollSource) -> Subscription<Message> {
    Subscription::run_with(source, |source| operations_stream(source.clone()))
}

/// Poll the slice list endpoint.
pub fn slices_subscription(source: PollSource) -> Subscription<Message> {
    Subscription::run_with(source, |source| slices_stream(source.clone()))
}

fn operations_stream(source: PollSource) -> BoxStream<'static, Message> {
    let poller = Poller::new(TokioScheduler, source.api.poll_interval());

    if source.demo {
        let mut rng = SmallRng::from_os_rng();
        return poller
            .stream(move || {
                std::future::ready(Ok::<_, FetchError>(mock::jittered_operations(&mut rng)))
            })
            .map(Message::OperationsFetched)
            .boxed();
    }

    match ApiClient::new(&source.api) {
        Ok(client) => poller
            .stream(move || {
                let client = client.clone();
                async move { client.fetch_operations().await }
            })
            .map(Message::OperationsFetched)
            .boxed(),
        Err(e) => unavailable(&source.api, e, Message::OperationsFetched),
    }
}

fn slices_stream(source: PollSource) -> BoxStream<'static, Message> {
    let poller = Poller::new(TokioScheduler, source.api.poll_interval());

    if source.demo {
        let mut rng = SmallRng::from_os_rng();
        return poller
            .stream(move || std::future::ready(Ok::<_, FetchError>(mock::jittered_slices(&mut rng))))
            .map(Message::SlicesFetched)
            .boxed();
    }

    match ApiClient::new(&source.api) {
        Ok(client) => poller
            .stream(move || {
                let client = client.clone();
                async move { client.fetch_slices().await }
            })
            .map(Message::SlicesFetched)
            .boxed(),
        Err(e) => unavailable(&source.api, e, Message::SlicesFetched),
    }
}

/// Report a client that could not be built once, then stay idle.
fn unavailable<T: Send + 'static>(
    api: &ApiConfig,
    error: Error,
    wrap: fn(Result<T, FetchError>) -> Message,
) -> BoxStream<'static, Message> {
    tracing::error!(error = %error, base_url = %api.base_url, "Cannot create API client");

    let failure = FetchError::Transport {
        url: api.base_url.clone(),
        reason: error.to_string(),
    };

    stream::once(async move { wrap(Err(failure)) })
        .chain(stream::pending())
        .boxed()
}

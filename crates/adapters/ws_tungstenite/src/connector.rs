//! [`StreamConnector`] implementation backed by `tokio-tungstenite`.

use std::time::Duration;

use futures_util::{SinkExt as _, StreamExt as _};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;

use wraphmi_app::ports::{StreamConnector, StreamLink, StreamPeer};
use wraphmi_domain::error::SyncError;

use crate::config::WsConfig;
use crate::error::WsError;

/// Opens WebSocket links to the device.
#[derive(Debug, Clone)]
pub struct WsConnector {
    url: String,
    connect_timeout: Duration,
    buffer: usize,
}

impl WsConnector {
    #[must_use]
    pub fn new(config: &WsConfig) -> Self {
        Self {
            url: config.url.clone(),
            connect_timeout: config.connect_timeout(),
            buffer: config.buffer.max(1),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn handshake(&self) -> Result<StreamLink, WsError> {
        let (socket, _response) = tokio::time::timeout(
            self.connect_timeout,
            tokio_tungstenite::connect_async(self.url.as_str()),
        )
        .await
        .map_err(|_| WsError::Timeout(self.connect_timeout))?
        .map_err(WsError::Handshake)?;

        let (link, peer) = StreamLink::pair(self.buffer);
        spawn_pumps(socket, peer);
        Ok(link)
    }
}

impl StreamConnector for WsConnector {
    async fn connect(&self) -> Result<StreamLink, SyncError> {
        tracing::debug!(url = %self.url, "opening websocket");
        let link = self.handshake().await?;
        tracing::debug!(url = %self.url, "websocket open");
        Ok(link)
    }
}

/// Move frames between the socket and the peer ends of a link.
fn spawn_pumps<S>(socket: WebSocketStream<S>, peer: StreamPeer)
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let (mut sink, mut stream) = socket.split();
    let StreamPeer {
        mut outbound,
        inbound,
    } = peer;

    // A failed write ends the link through the inbound side.
    let failures = inbound.clone();
    let writer = tokio::spawn(async move {
        while let Some(frame) = outbound.recv().await {
            if let Err(err) = sink.send(Message::Text(frame)).await {
                tracing::debug!(%err, "websocket write failed");
                let _ = failures.send(Err(WsError::Write(err).into_domain())).await;
                return;
            }
        }
        let _ = sink.close().await;
    });

    tokio::spawn(async move {
        loop {
            tokio::select! {
                msg = stream.next() => match msg {
                    Some(Ok(Message::Text(text))) => {
                        if inbound.send(Ok(text)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(frame))) => {
                        tracing::debug!(?frame, "websocket closed by device");
                        break;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::debug!(%err, "websocket read failed");
                        let _ = inbound.send(Err(WsError::Read(err).into_domain())).await;
                        break;
                    }
                    None => break,
                },
                () = inbound.closed() => break,
            }
        }
        writer.abort();
    });
}

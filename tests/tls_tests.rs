use anyhow::Result;
use ehop::{ApplianceClient, ClientOptions, Credential, EhopError};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_rustls::rustls::crypto::ring;
use tokio_rustls::rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use tokio_rustls::rustls::ServerConfig;
use tokio_rustls::TlsAcceptor;

/// Acceptor presenting a freshly generated self-signed certificate for
/// `localhost`, like an appliance straight out of the box.
fn self_signed_acceptor() -> Result<TlsAcceptor> {
    let rcgen::CertifiedKey { cert, key_pair } =
        rcgen::generate_simple_self_signed(vec!["localhost".to_string()])?;
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der()));

    let config = ServerConfig::builder_with_provider(Arc::new(ring::default_provider()))
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_single_cert(vec![cert.der().clone()], key)?;

    Ok(TlsAcceptor::from(Arc::new(config)))
}

/// One-shot HTTPS server. Resolves to `true` when a request made it
/// through the handshake and was answered.
async fn spawn_tls_appliance() -> Result<(SocketAddr, JoinHandle<bool>)> {
    let acceptor = self_signed_acceptor()?;
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        let Ok((socket, _)) = listener.accept().await else {
            return false;
        };
        let Ok(mut stream) = acceptor.accept(socket).await else {
            return false;
        };

        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf).await {
                Ok(0) | Err(_) => return false,
                Ok(n) => raw.extend_from_slice(&buf[..n]),
            }
        }

        let body = r#"[{"id": 1}]"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        if stream.write_all(response.as_bytes()).await.is_err() {
            return false;
        }
        stream.shutdown().await.ok();
        true
    });

    Ok((addr, handle))
}

fn localhost_credential(addr: SocketAddr) -> Credential {
    Credential::new("abc", format!("localhost:{}", addr.port()))
}

#[tokio::test]
async fn test_default_client_accepts_self_signed_certificate() -> Result<()> {
    let (addr, server) = spawn_tls_appliance().await?;
    let client = ApplianceClient::new(&ClientOptions::default())?;

    let response = client
        .send("GET", "devices", "", &localhost_credential(addr))
        .await?;
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await?, r#"[{"id": 1}]"#);

    assert!(server.await?, "request should reach the handler");
    Ok(())
}

#[tokio::test]
async fn test_verifying_client_rejects_self_signed_certificate() -> Result<()> {
    let (addr, server) = spawn_tls_appliance().await?;
    let client = ApplianceClient::new(&ClientOptions {
        verify_tls: true,
        ..Default::default()
    })?;

    let err = client
        .send("GET", "devices", "", &localhost_credential(addr))
        .await
        .unwrap_err();
    assert!(matches!(err, EhopError::Transport(_)));

    assert!(!server.await?, "request must not reach the handler");
    Ok(())
}

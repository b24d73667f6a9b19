use modelfetch_core::downloaders::{Downloader, HuggingFaceDownloader};
use modelfetch_core::{fetch_all, Config, Descriptor, RemoteFile, Tier};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn config_for(server: &mockito::ServerGuard, root: &std::path::Path, token: Option<&str>) -> Config {
    Config::new(root.to_path_buf(), token.map(String::from), server.url())
}

#[tokio::test]
async fn downloads_file_from_subfolder() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/uwg/upscaler/resolve/main/ESRGAN/4x-UltraSharp.pth")
        .with_status(200)
        .with_body("upscaler weights")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, dir.path(), None);
    let downloader = HuggingFaceDownloader::new(&config).unwrap();
    let remote = RemoteFile::parse(
        "https://huggingface.co/uwg/upscaler/resolve/main/ESRGAN/",
        "4x-UltraSharp.pth",
    )
    .unwrap();

    let dest = dir.path().join("upscale_models");
    let path = downloader.download(&remote, &dest).await.unwrap();

    mock.assert_async().await;
    assert_eq!(path, dest.join("4x-UltraSharp.pth"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "upscaler weights");
    assert!(!dest.join("4x-UltraSharp.pth.part").exists());
}

#[tokio::test]
async fn sends_token_as_bearer_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/lllyasviel/Annotators/resolve/main/res101.pth")
        .match_header("authorization", "Bearer hf_secret")
        .with_status(200)
        .with_body("annotator")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, dir.path(), Some("hf_secret"));
    let downloader = HuggingFaceDownloader::new(&config).unwrap();
    let remote = RemoteFile::parse(
        "https://huggingface.co/lllyasviel/Annotators/resolve/main/",
        "res101.pth",
    )
    .unwrap();

    downloader.download(&remote, dir.path()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn http_error_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/org/gated/resolve/main/model.safetensors")
        .with_status(401)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, dir.path(), None);
    let downloader = HuggingFaceDownloader::new(&config).unwrap();
    let remote =
        RemoteFile::parse("https://huggingface.co/org/gated/resolve/main/", "model.safetensors")
            .unwrap();

    let err = downloader.download(&remote, dir.path()).await.unwrap_err();
    assert!(err.to_string().contains("model.safetensors"));
    assert!(err.to_string().contains("401"));
    assert!(!dir.path().join("model.safetensors").exists());
}

#[tokio::test]
async fn fetch_loop_stops_after_server_error() {
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("GET", "/org/repo/resolve/main/first.bin")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let never = server
        .mock("GET", "/org/repo/resolve/main/second.bin")
        .with_status(200)
        .with_body("x")
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, dir.path(), None);
    let downloader = HuggingFaceDownloader::new(&config).unwrap();
    let location = "https://huggingface.co/org/repo/resolve/main/";
    let selected = [
        Descriptor::new("first.bin", location, "checkpoints", Tier::Required),
        Descriptor::new("second.bin", location, "checkpoints", Tier::Recommended),
    ];

    assert!(fetch_all(&downloader, &config, &selected).await.is_err());

    failing.assert_async().await;
    never.assert_async().await;
}

/// Serves one response that promises more bytes than it sends, then hangs up.
async fn truncated_body_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\npartial")
            .await
            .unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn interrupted_body_leaves_no_partial_file() {
    let endpoint = truncated_body_server().await;
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().to_path_buf(), None, endpoint);
    let downloader = HuggingFaceDownloader::new(&config).unwrap();
    let remote =
        RemoteFile::parse("https://huggingface.co/org/repo/resolve/main/", "model.safetensors")
            .unwrap();

    let dest = dir.path().join("checkpoints");
    assert!(downloader.download(&remote, &dest).await.is_err());

    assert!(!dest.join("model.safetensors.part").exists());
    assert!(!dest.join("model.safetensors").exists());
}

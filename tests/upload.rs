use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use sketchnote::export::{
    ExportDependencies, ExportOutcome, ExportStage, Exporter, NoteColor, NoteMetadata,
    UploadEndpoint,
};
use sketchnote::input::{PointerEvent, SketchSession};
use sketchnote::notification::{Notification, Notifier, Severity};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Default)]
struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().unwrap().push(notification);
    }
}

/// A captured HTTP request: head (request line plus headers) and body.
struct CapturedRequest {
    head: String,
    body: Vec<u8>,
}

impl CapturedRequest {
    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Serves a single request with `status` and hands back what was received.
async fn one_shot_server(status: u16) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];

        let head_end = loop {
            let read = stream.read(&mut chunk).await.unwrap();
            assert!(read > 0, "connection closed before headers");
            buffer.extend_from_slice(&chunk[..read]);
            if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buffer[..head_end]).into_owned();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .expect("multipart upload has a content length");

        while buffer.len() < head_end + content_length {
            let read = stream.read(&mut chunk).await.unwrap();
            assert!(read > 0, "connection closed before body");
            buffer.extend_from_slice(&chunk[..read]);
        }

        let response = format!(
            "HTTP/1.1 {status} Test\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        CapturedRequest {
            head,
            body: buffer[head_end..head_end + content_length].to_vec(),
        }
    });

    (base_url, handle)
}

fn exporter_for(base_url: &str, notifier: Arc<RecordingNotifier>) -> Exporter {
    let endpoint = UploadEndpoint::parse(base_url, None).unwrap();
    let deps = ExportDependencies::new(endpoint)
        .unwrap()
        .with_notifier(notifier);
    Exporter::new(deps, Default::default())
}

fn drawn_session() -> SketchSession {
    let mut session = SketchSession::new(50, 40);
    session.handle_pointer(PointerEvent::press(5.0, 5.0));
    session.handle_pointer(PointerEvent::moved(25.0, 30.0));
    session.handle_pointer(PointerEvent::moved(45.0, 10.0));
    session.handle_pointer(PointerEvent::Release);
    session
}

#[tokio::test]
async fn upload_posts_multipart_note_without_remind() {
    let (base_url, server) = one_shot_server(201).await;
    let notifier = Arc::new(RecordingNotifier::default());
    let exporter = exporter_for(&base_url, notifier.clone());

    let metadata = NoteMetadata {
        title: "Doodle".to_string(),
        background: NoteColor::new(1, 2, 3, 0.5),
        remind_at: None,
        content: "hello".to_string(),
    };
    let outcome = exporter.upload(&drawn_session(), &metadata, "42").await;
    assert_eq!(outcome, ExportOutcome::Uploaded);

    let request = server.await.unwrap();
    assert!(request.head.starts_with("POST /new-note-image/42 HTTP/1.1"));
    assert!(request.head.to_lowercase().contains("multipart/form-data"));

    let body = request.body_text();
    assert!(body.contains("name=\"image_note\"; filename=\"screenshot.png\""));
    assert!(body.contains("image/png"));
    for (name, value) in [
        ("type", "image"),
        ("title", "Doodle"),
        ("r", "1"),
        ("g", "2"),
        ("b", "3"),
        ("a", "0.5"),
        ("content", "hello"),
    ] {
        assert!(
            body.contains(&format!("name=\"{name}\"\r\n\r\n{value}\r\n")),
            "missing field {name}"
        );
    }
    assert!(!body.contains("name=\"remind\""));

    let received = notifier.received.lock().unwrap();
    assert_eq!(*received, vec![Notification::success("Save note successfully")]);
}

#[tokio::test]
async fn upload_sends_formatted_remind() {
    let (base_url, server) = one_shot_server(200).await;
    let exporter = exporter_for(&base_url, Arc::new(RecordingNotifier::default()));

    let metadata = NoteMetadata {
        remind_at: NaiveDate::from_ymd_opt(2024, 11, 3)
            .unwrap()
            .and_hms_opt(7, 4, 9),
        ..NoteMetadata::default()
    };
    let outcome = exporter.upload(&drawn_session(), &metadata, "9").await;
    assert!(outcome.is_success());

    let body = server.await.unwrap().body_text();
    assert!(body.contains("name=\"remind\"\r\n\r\n2024/11/3 07:04:09\r\n"));
}

#[tokio::test]
async fn server_error_fails_once_and_keeps_session() {
    let (base_url, server) = one_shot_server(500).await;
    let notifier = Arc::new(RecordingNotifier::default());
    let exporter = exporter_for(&base_url, notifier.clone());

    let session = drawn_session();
    let strokes_before = session.sketch().strokes().to_vec();

    let outcome = exporter
        .upload(&session, &NoteMetadata::default(), "42")
        .await;
    match outcome {
        ExportOutcome::Failed { stage, message } => {
            assert_eq!(stage, ExportStage::Transport);
            assert!(message.contains("500"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
    server.await.unwrap();

    let received = notifier.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].severity, Severity::Error);
    assert_eq!(received[0].message, "Failed to save note");
    assert_eq!(session.sketch().strokes(), strokes_before.as_slice());
}

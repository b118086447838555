use crate::domain::Listing;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

pub const DATASET_JSON: &str = r#"[
    {
        "titel": "Altbauwohnung am Park",
        "stadt": "Berlin",
        "zimmer": 3,
        "kaufpreis": 300000,
        "groesse_qm": 85,
        "bild_url": "img/berlin.jpg",
        "key_facts": ["Balkon", "Altbau", "Parkett"]
    },
    {
        "titel": "Penthouse mit Alpenblick",
        "stadt": "Munich",
        "zimmer": 2,
        "kaufpreis": 600000,
        "groesse_qm": 70,
        "bild_url": "img/munich.jpg",
        "key_facts": ["Dachterrasse", "Aufzug"]
    }
]"#;

pub fn fixture_listings() -> Vec<Listing> {
    serde_json::from_str(DATASET_JSON).unwrap_or_else(|e| panic!("fixture parse failed: {e}"))
}

/// Serves exactly one HTTP response on a loopback port and returns its URL.
pub fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    (format!("http://{addr}/immobilien.json"), handle)
}

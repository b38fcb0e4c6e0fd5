use std::sync::{Arc, Mutex};

use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpListener,
};

/// A very hacky `player_api.php` stand-in
///
/// Serves canned `(action, status, body)` answers on a random local port until the
/// test runtime shuts down. Unknown actions get a 404.
pub struct MockPanel {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockPanel {
    pub async fn start(routes: &[(&str, u16, &str)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Vec<(String, u16, String)> = routes
            .iter()
            .map(|(action, status, body)| ((*action).to_string(), *status, (*body).to_string()))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));

        {
            let requests = requests.clone();
            tokio::spawn(async move {
                loop {
                    let Ok((mut stream, _)) = listener.accept().await else {
                        return;
                    };

                    let mut reader = BufReader::new(&mut stream);
                    let mut head = String::new();
                    loop {
                        let mut line = String::new();
                        if reader.read_line(&mut line).await.unwrap_or(0) == 0 || line == "\r\n" {
                            break;
                        }
                        head.push_str(&line);
                    }

                    let (status, body) = routes
                        .iter()
                        .find(|(action, _, _)| {
                            head.lines()
                                .next()
                                .is_some_and(|l| l.contains(&format!("action={action} ")))
                        })
                        .map_or((404, String::new()), |(_, s, b)| (*s, b.clone()));
                    requests.lock().unwrap().push(head);

                    let response = format!(
                        "HTTP/1.1 {status} Mock\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    stream.write_all(response.as_bytes()).await.ok();
                    stream.shutdown().await.ok();
                }
            });
        }

        Self {
            base_url: format!("http://{addr}/player_api.php?username=u&password=p"),
            requests,
        }
    }

    /// Request heads received so far, request line first
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

//! HTTP listener that applies network time-set requests to the wall clock.
//!
//! One connection at a time on port 80. A GET whose query resolves to at
//! least one valid time field is applied to the RTC immediately, bypassing
//! the state machine entirely; everything else gets the index page, which
//! carries the form for submitting a time.

use defmt::{Debug2Format, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_net::Stack;
use embassy_net::tcp::TcpSocket;
use embassy_time::{Duration, Timer};
use embedded_io_async::Write as _;
use static_cell::StaticCell;

use crate::time_query::{TimeSetQuery, request_query, resolve_query};
use crate::wall_clock::WallClock;

const HTTP_PORT: u16 = 80;

const INDEX_PAGE: &str = "HTTP/1.1 200 OK\r\n\
     Content-Type: text/html\r\n\
     Connection: close\r\n\
     \r\n\
     <!DOCTYPE html>\
     <html>\
     <head>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>Panel Meter Clock</title>\
         <style>\
             body { font-family: Arial, sans-serif; max-width: 500px; margin: 50px auto; padding: 20px; }\
             input { width: 100%; padding: 10px; margin: 10px 0; box-sizing: border-box; }\
             button { width: 100%; padding: 12px; background-color: #4CAF50; color: white; border: none; cursor: pointer; }\
         </style>\
     </head>\
     <body>\
         <h1>Panel Meter Clock</h1>\
         <p>Set the time (any subset of fields):</p>\
         <form method=\"GET\" action=\"/\">\
            <label for=\"hour\">Hour (0-23):</label>\
            <input type=\"number\" id=\"hour\" name=\"hour\" min=\"0\" max=\"23\">\
            <label for=\"minute\">Minute (0-59):</label>\
            <input type=\"number\" id=\"minute\" name=\"minute\" min=\"0\" max=\"59\">\
            <label for=\"second\">Second (0-59):</label>\
            <input type=\"number\" id=\"second\" name=\"second\" min=\"0\" max=\"59\">\
            <button type=\"submit\">Set Clock</button>\
         </form>\
     </body>\
     </html>";

const TIME_SET_PAGE: &str = "HTTP/1.1 200 OK\r\n\
     Content-Type: text/html\r\n\
     Connection: close\r\n\
     \r\n\
     <!DOCTYPE html>\
     <html>\
     <head>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>Time Set</title>\
     </head>\
     <body>\
         <h1>Time set.</h1>\
         <p><a href=\"/\">Back</a></p>\
     </body>\
     </html>";

/// The network time-set path.
pub struct TimeSetServer;

impl TimeSetServer {
    /// Spawn the listener task; it serves until the process ends.
    pub fn start(stack: &'static Stack<'static>, wall_clock: &'static WallClock, spawner: Spawner) {
        let token = unwrap!(time_server_task(stack, wall_clock));
        spawner.spawn(token);
    }
}

#[embassy_executor::task]
async fn time_server_task(stack: &'static Stack<'static>, wall_clock: &'static WallClock) -> ! {
    info!("time-set server starting on port {}", HTTP_PORT);

    static RX_BUFFER: StaticCell<[u8; 2048]> = StaticCell::new();
    static TX_BUFFER: StaticCell<[u8; 4096]> = StaticCell::new();
    static REQUEST_BUFFER: StaticCell<[u8; 1024]> = StaticCell::new();

    let rx_buffer = RX_BUFFER.init([0; 2048]);
    let tx_buffer = TX_BUFFER.init([0; 4096]);
    let request = REQUEST_BUFFER.init([0; 1024]);

    loop {
        let mut socket = TcpSocket::new(*stack, rx_buffer, tx_buffer);
        socket.set_timeout(Some(Duration::from_secs(30)));

        if let Err(err) = socket.accept(HTTP_PORT).await {
            warn!("accept error: {:?}", err);
            Timer::after_millis(500).await;
            continue;
        }

        let request_len = match socket.read(request).await {
            Ok(0) => {
                let _ = socket.flush().await;
                socket.close();
                continue;
            }
            Ok(len) => len,
            Err(err) => {
                warn!("http read error: {:?}", err);
                let _ = socket.flush().await;
                socket.close();
                continue;
            }
        };

        let request_text = request
            .get(..request_len)
            .map_or("", |head| core::str::from_utf8(head).unwrap_or(""));

        let handled = request_query(request_text)
            .and_then(resolve_query)
            .is_some_and(|query| apply_query(wall_clock, &query));

        let response = if handled { TIME_SET_PAGE } else { INDEX_PAGE };
        if let Err(err) = socket.write_all(response.as_bytes()).await {
            warn!("http write error: {:?}", err);
        }

        let _ = socket.flush().await;
        socket.close();
        Timer::after_millis(100).await;
    }
}

/// Write the resolved fields straight into the RTC. Returns whether the
/// request was handled.
fn apply_query(wall_clock: &WallClock, query: &TimeSetQuery) -> bool {
    info!(
        "network time set: hour {:?} minute {:?} second {:?}",
        query.hour, query.minute, query.second
    );
    match wall_clock.overlay_time_of_day(query.hour, query.minute, query.second) {
        Ok(()) => true,
        Err(err) => {
            warn!("wall clock write failed: {}", Debug2Format(&err));
            false
        }
    }
}

//! Interactive buffer management shell.
//!
//! Menu-driven driver over a single `MsgRing`: produce, consume, view,
//! save, load. The ring is plain state; all I/O lives here.
//!
//! ```sh
//! cargo run --example shell
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;

use msg_ring::{DEFAULT_CAPACITY, MsgRing, load, save};
use time::OffsetDateTime;

const DATA_FILE: &str = "datafile.txt";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    let mut ring: MsgRing<DEFAULT_CAPACITY> = MsgRing::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Buffer Management Menu");
        println!("----------------------");
        println!("1. Produce a new message for the buffer");
        println!("2. Consume a message from the buffer");
        println!("3. View the contents of the buffer");
        println!("4. Save the messages to disk");
        println!("5. Read messages from disk");
        println!("6. Exit from the program");
        println!();
        print!("Enter your option: ");
        io::stdout().flush()?;

        let Some(choice) = lines.next().transpose()? else {
            break;
        };
        println!();

        match choice.trim() {
            "1" => {
                print!("Enter data (0-255): ");
                io::stdout().flush()?;
                let Some(input) = lines.next().transpose()? else {
                    break;
                };
                match input.trim().parse::<u8>() {
                    Ok(payload) => {
                        if let Some(evicted) = ring.produce(payload, now()) {
                            println!(
                                "Overflow: overwrote oldest message (payload {})",
                                evicted.payload()
                            );
                        }
                    }
                    Err(err) => println!("Not a byte value: {err}"),
                }
            }
            "2" => match ring.consume() {
                Some(msg) => {
                    println!("Data\tTime");
                    println!("{msg}");
                }
                None => println!("No messages in the buffer"),
            },
            "3" => {
                if ring.is_empty() {
                    println!("No messages in the buffer");
                } else {
                    println!("Offset\tData\tTime");
                    for (offset, msg) in ring.iter() {
                        println!("{offset}\t{msg}");
                    }
                }
            }
            "4" => match save(&ring, Path::new(DATA_FILE)) {
                Ok(count) => println!("{count} messages saved to disk"),
                Err(err) => println!("Save failed: {err}"),
            },
            "5" => match load(Path::new(DATA_FILE), now()) {
                Ok(loaded) => {
                    ring = loaded;
                    println!("{} messages loaded from disk", ring.len());
                }
                Err(err) => println!("Load failed: {err}"),
            },
            "6" => break,
            _ => println!("Invalid entry"),
        }
    }

    Ok(())
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

//! Example: fetching an individual result.
//!
//! Run with:
//! cargo run --example fetch_result -- <exam> <year> <board> <roll> <registration>
//!
//! The captcha is written to `captcha.png`; type its text when prompted.

use eresult::{BoardType, ExamType, Query, QueryVariant, ResultClient};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output (optional)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [exam, year, board, roll, registration] = args.as_slice() else {
        anyhow::bail!("usage: fetch_result <exam> <year> <board> <roll> <registration>");
    };

    let query = Query::builder()
        .variant(QueryVariant::Individual)
        .exam_type(exam.parse::<ExamType>()?)
        .year(year.as_str())
        .board_type(board.parse::<BoardType>()?)
        .student_roll_number(roll.as_str())
        .registration_id(registration.as_str())
        .build()?;

    let client = ResultClient::new(query)?;

    let challenge = client.fetch_captcha_blocking()?;
    challenge.captcha.image().save("captcha.png")?;
    println!("Captcha saved to captcha.png");

    print!("Captcha text: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    let document = client.fetch_result_blocking(challenge.session, answer.trim())?;
    println!("{}", document);

    Ok(())
}

//! Ellipsify an image in three passes, each one finer than the last.
//!
//! `cargo run --release --example ellipsify -- TestImage.jpg [resume]`
//!
//! Circles are logged to `<image>.txt`, and the claimed state of the image is written to
//! `temp.png` after every circle. With `resume`, the circles of the log are restored and
//! only the remaining passes are searched.

use {
  ellipsify::{
    checkpoint::{Checkpoint, CircleLog, FileCheckpoint},
    config::Config,
    error,
    solver::ellipsify
  },
  std::process::ExitCode
};

fn passes() -> Vec<Config> {
  let coarse = Config::default()
    .threshold(7)
    .precision(3)
    .minimum_size(2);
  vec![
    coarse.clone(),
    coarse.clone().threshold(10).minimum_size(1).pass_number(1),
    coarse.threshold(14).precision(2).minimum_size(1).pass_number(2),
  ]
}

fn run(path: &str, resume: bool) -> error::Result<()> {
  let checkpoint = FileCheckpoint::new(CircleLog::beside(path))
    .with_snapshot("temp.png");
  let passes = match resume {
    true => {
      let logged = checkpoint.replay()?.len();
      println!("resuming after {} circles", logged);
      passes().split_off(1)
    }
    false => passes()
  };

  let ellipsis = ellipsify(path, &passes, checkpoint)?;
  for record in ellipsis.records() {
    println!("{}", record);
  }
  println!(
    "{} circles encompassing {} of {} pixels",
    ellipsis.records().len(),
    ellipsis.covered_pixels(),
    ellipsis.width as u64 * ellipsis.height as u64
  );
  Ok(())
}

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let mut args = std::env::args().skip(1);
  let path = args.next().unwrap_or_else(|| "TestImage.jpg".into());
  let resume = args.next().as_deref() == Some("resume");

  match run(&path, resume) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprint!("{}", error::display(&e));
      ExitCode::FAILURE
    }
  }
}

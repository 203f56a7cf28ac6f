use {
  super::*,
  image::Rgb
};

#[test] fn append_then_replay() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let log = CircleLog::new(dir.path().join("log.txt"));
  let circles = [Circle::new(10, 10, 9), Circle::new(2, 16, 3), Circle::new(0, 1, 1)];
  circles.iter().try_for_each(|circle| log.append(circle))?;

  assert_eq!(fs::read_to_string(log.path())?, "(10, 10, 9)\n(2, 16, 3)\n(0, 1, 1)\n");
  assert_eq!(log.replay()?, circles);
  Ok(())
}

#[test] fn truncate_forgets_previous_passes() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let log = CircleLog::new(dir.path().join("log.txt"));
  log.append(&Circle::new(4, 4, 4))?;
  log.truncate()?;
  assert!(log.replay()?.is_empty());
  assert!(log.path().exists());
  Ok(())
}

#[test] fn missing_log_is_empty() -> Result<()> {
  let dir = tempfile::tempdir()?;
  assert!(CircleLog::new(dir.path().join("nothing.txt")).replay()?.is_empty());
  Ok(())
}

#[test] fn malformed_line_is_fatal() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let log = CircleLog::new(dir.path().join("log.txt"));
  fs::write(log.path(), "(1, 2, 3)\n\n(4, 5)\n(6, 7, 8)\n")?;

  let err = log.replay().unwrap_err();
  match err.downcast_ref::<Error>() {
    Some(Error::MalformedLog { line, content }) => {
      assert_eq!(*line, 3);
      assert_eq!(content, "(4, 5)");
    }
    other => panic!("unexpected error {:?}", other)
  }
  assert_eq!(err.root_cause().to_string(), "expected 3 fields, found 2");
  Ok(())
}

#[test] fn log_beside_image() {
  assert_eq!(CircleLog::beside("in/TestImage.jpg").path(), Path::new("in/TestImage.jpg.txt"));
}

#[test] fn file_checkpoint_snapshot() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let grid = PixelGrid::solid(5, 5, Rgb([1, 1, 1]));

  let mut without = FileCheckpoint::new(CircleLog::new(dir.path().join("a.txt")));
  without.snapshot(&grid)?;

  let path = dir.path().join("temp.png");
  let mut with = FileCheckpoint::new(CircleLog::new(dir.path().join("b.txt")))
    .with_snapshot(&path);
  with.snapshot(&grid)?;
  assert!(path.exists());
  Ok(())
}

#[test] fn memory_checkpoint() -> Result<()> {
  let mut checkpoint = MemoryCheckpoint::default();
  checkpoint.append(&Circle::new(3, 4, 5))?;
  checkpoint.append(&Circle::new(6, 7, 8))?;
  assert_eq!(checkpoint.replay()?, [Circle::new(3, 4, 5), Circle::new(6, 7, 8)]);

  checkpoint.lines.insert(1, "garbage".into());
  assert!(checkpoint.replay().is_err());

  checkpoint.reset()?;
  assert!(checkpoint.replay()?.is_empty());
  Ok(())
}

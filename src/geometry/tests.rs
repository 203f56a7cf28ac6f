use {
  super::*,
  anyhow::Result,
  std::collections::HashSet
};

#[test] fn degenerate_radii_have_no_samples() {
  for density in 1..4 {
    assert!(boundary_offsets(0, 1, density).is_empty());
    assert!(boundary_offsets(1, 1, density).is_empty());
  }
}

#[test] fn samples_mirror_across_both_axes() {
  for radius in 2..64 {
    for step in 1..4 {
      let offsets = boundary_offsets(radius, step, 1);
      let set = offsets.iter().copied().collect::<HashSet<_>>();
      assert!(!offsets.is_empty());
      for offset in offsets {
        assert!(set.contains(&Offset::new(-offset.x, offset.y)), "r = {}, {:?}", radius, offset);
        assert!(set.contains(&Offset::new(offset.x, -offset.y)), "r = {}, {:?}", radius, offset);
      }
    }
  }
}

#[test] fn sample_count_follows_radius() {
  // four mirrored samples per quadrant step
  assert_eq!(boundary_offsets(2, 1, 1).len(), 3 * 4);
  assert_eq!(boundary_offsets(9, 1, 1).len(), 10 * 4);
  assert_eq!(boundary_offsets(9, 2, 1).len(), 5 * 4);
  assert_eq!(boundary_offsets(9, 1, 3).len(), 30 * 4);
}

#[test] fn samples_stay_within_radius() {
  for radius in 2..64 {
    let offsets = boundary_offsets(radius, 1, 2);
    let r = radius as i32;
    assert!(offsets.iter().all(|o| o.x.abs() <= r && o.y.abs() <= r));
    // the quarter turn always lands on the vertical axis
    assert!(offsets.contains(&Offset::new(0, r)));
    assert!(offsets.contains(&Offset::new(0, -r)));
  }
}

#[test] fn boundary_table_matches_direct_computation() {
  let table = BoundaryTable::new(20, 0, 1, 1);
  assert_eq!(table.max_radius(), 20);
  for radius in 0..=20 {
    assert_eq!(table.get(radius), Some(boundary_offsets(radius, 1, 1).as_slice()));
  }
  assert_eq!(table.get(21), None);

  let outer = BoundaryTable::new(20, 1, 1, 1);
  assert_eq!(outer.get(7), Some(edge_offsets(7, 1, 1, 1).as_slice()));
}

#[test] fn outer_edge_samples_one_pixel_out() {
  assert!(edge_offsets(1, 1, 1, 1).is_empty());
  for radius in 2..12 {
    let inner = boundary_offsets(radius, 1, 1);
    let outer = edge_offsets(radius, 1, 1, 1);
    assert_eq!(inner.len(), outer.len());
    let r = radius as i32 + 1;
    assert!(outer.iter().all(|o| o.x.abs() <= r && o.y.abs() <= r));
    assert!(outer.contains(&Offset::new(0, r)));
    assert!(outer.contains(&Offset::new(0, -r)));
  }
}

#[test] fn bounds() {
  let size = Size::new(20, 10);
  assert!(in_bounds(SignedPoint::new(0, 0), size));
  assert!(in_bounds(SignedPoint::new(19, 9), size));
  assert!(!in_bounds(SignedPoint::new(20, 9), size));
  assert!(!in_bounds(SignedPoint::new(3, -1), size));

  assert_eq!(offset_point(Point::new(2, 2), Offset::new(-2, 7), size), Some(Point::new(0, 9)));
  assert_eq!(offset_point(Point::new(2, 2), Offset::new(-3, 0), size), None);

  assert!(circle_fits_bounds(Point::new(10, 5), 5, size));
  assert!(circle_fits_bounds(Point::new(10, 5), 0, size));
  assert!(!circle_fits_bounds(Point::new(10, 5), 6, size));
  assert!(!circle_fits_bounds(Point::new(16, 5), 5, size));
}

#[test] fn disk_pixels_are_clipped() {
  let size = Size::new(10, 10);
  let full = Circle::new(5, 5, 2).pixels(size).collect::<Vec<_>>();
  assert_eq!(full.len(), 13);
  assert!(full.iter().all(|p| (p.x as i64 - 5).pow(2) + (p.y as i64 - 5).pow(2) <= 4));

  let corner = Circle::new(0, 0, 2).pixels(size).collect::<HashSet<_>>();
  assert_eq!(corner.len(), 6);
  assert!(corner.contains(&Point::new(0, 0)));
  assert!(corner.contains(&Point::new(2, 0)));
  assert!(!corner.contains(&Point::new(2, 2)));
}

#[test] fn circle_log_line() -> Result<()> {
  let circle = Circle::new(12, 7, 30);
  assert_eq!(circle.to_string(), "(12, 7, 30)");
  assert_eq!(" (12,7,  30) ".parse::<Circle>()?, circle);
  assert!("(12, 7)".parse::<Circle>().is_err());
  assert!("12, 7, 30".parse::<Circle>().is_err());
  assert!("(12, -7, 30)".parse::<Circle>().is_err());
  Ok(())
}

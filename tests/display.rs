//! Needs a real display; run with `cargo test -- --ignored`.

use dmd_window::{list_monitors, DmdWindow, WindowSettings};

#[test]
#[ignore]
fn opens_on_the_last_monitor_and_closes() {
    let monitors = list_monitors().unwrap();
    let mut window = DmdWindow::new(&WindowSettings::default()).unwrap();
    assert_eq!(window.monitor_index(), monitors.len() - 1);

    let (width, height) = window.framebuffer_size();
    assert_eq!((width as u32, height as u32), window.video_mode().size());

    window.set_should_close(true);
    window.run();
    assert!(window.should_close());
}

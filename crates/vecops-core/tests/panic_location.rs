//! Short-buffer panics from strided kernels point at the calling line

use std::panic;
use std::sync::Mutex;

use vecops_core::{abs_sum_inc, axpy_inc, KernelPrimitives, ScalarBackend, Stride};

static LAST_PANIC: Mutex<Option<(String, u32)>> = Mutex::new(None);

/// Run `f`, expect it to panic and return the reported file and line
fn panic_site<F: FnOnce() + panic::UnwindSafe>(f: F) -> (String, u32) {
    *LAST_PANIC.lock().unwrap() = None;
    let result = panic::catch_unwind(f);
    assert!(result.is_err(), "expected a panic");
    LAST_PANIC.lock().unwrap().take().expect("panic hook did not run")
}

#[test]
fn test_strided_panics_report_caller_location() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        if let Some(loc) = info.location() {
            *LAST_PANIC.lock().unwrap() = Some((loc.file().to_string(), loc.line()));
        }
    }));

    let short = [1.0, 2.0, 3.0, 4.0];
    let stride = Stride::new(3, 2).unwrap();

    let expected_line = line!() + 2;
    let (file, line) = panic_site(|| {
        abs_sum_inc(&short, stride);
    });
    assert!(file.ends_with("panic_location.rs"), "reported at {file}:{line}");
    assert_eq!(line, expected_line);

    let backend = ScalarBackend::new();
    let (file, _) = panic_site(|| {
        backend.sum_inc(&short, stride);
    });
    assert!(file.ends_with("panic_location.rs"), "reported at {file}");

    let (file, _) = panic_site(|| {
        let mut y = [0.0; 2];
        axpy_inc(1.0, &short, stride, &mut y, Stride::new(3, 1).unwrap());
    });
    assert!(file.ends_with("panic_location.rs"), "reported at {file}");

    panic::set_hook(previous);
}

//! Logging macros. With the `tracing` feature they forward to the `tracing`
//! crate; without it they expand to `()`, so they work in statement and
//! expression position alike.

#![allow(unused_macros)]

#[cfg(feature = "tracing")]
macro_rules! trace_log {
	($($arg:tt)*) => { tracing::trace!($($arg)*) };
}
#[cfg(not(feature = "tracing"))]
macro_rules! trace_log {
	($($arg:tt)*) => { () };
}

#[cfg(feature = "tracing")]
macro_rules! debug_log {
	($($arg:tt)*) => { tracing::debug!($($arg)*) };
}
#[cfg(not(feature = "tracing"))]
macro_rules! debug_log {
	($($arg:tt)*) => { () };
}

#[cfg(feature = "tracing")]
macro_rules! warn_log {
	($($arg:tt)*) => { tracing::warn!($($arg)*) };
}
#[cfg(not(feature = "tracing"))]
macro_rules! warn_log {
	($($arg:tt)*) => { () };
}

#[cfg(test)]
mod tests {
	#[test]
	fn test_expression_position() {
		let stopped = true;
		let () = if stopped { debug_log!("stopped: {}", stopped) } else { trace_log!("ran") };
		let () = match stopped {
			true => warn_log!(stopped, "warned"),
			false => (),
		};
	}
}

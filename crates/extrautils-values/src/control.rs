//! Run side effects around a command only when a condition holds.

/// Runs `command` when `condition` is true.
pub fn run_if(condition: bool, command: impl FnOnce()) {
    if condition {
        command();
    }
}

/// Runs `before` (only if `condition`), then `command`, returning its result.
///
/// ```
/// use extrautils_values::before_command_if;
///
/// let mut log = Vec::new();
/// let sum = before_command_if(|| 2 + 2, true, || log.push("computing"));
/// assert_eq!(sum, 4);
/// assert_eq!(log, ["computing"]);
/// ```
pub fn before_command_if<T>(
    command: impl FnOnce() -> T,
    condition: bool,
    before: impl FnOnce(),
) -> T {
    run_if(condition, before);
    command()
}

/// Runs `command`, then `after` (only if `condition`), returning the result.
pub fn after_command_if<T>(command: impl FnOnce() -> T, condition: bool, after: impl FnOnce()) -> T {
    let result = command();
    run_if(condition, after);
    result
}

/// Like [`after_command_if`], but `after` gets to see the result.
pub fn after_command_if_with<T>(
    command: impl FnOnce() -> T,
    condition: bool,
    after: impl FnOnce(&T),
) -> T {
    let result = command();
    if condition {
        after(&result);
    }
    result
}

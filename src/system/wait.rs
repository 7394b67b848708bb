// src/system/wait.rs

use crate::system::executor::ExecutionError;
use nix::errno::Errno;
use nix::sys::wait::{WaitStatus, waitpid};
use nix::unistd::Pid;

/// Blocks until `pid` has been reaped, then asserts that it exited with status zero.
///
/// `command` is only used to make errors self-explanatory. A child killed by a
/// signal counts as a failure.
pub fn wait_for(pid: Pid, command: &str) -> Result<(), ExecutionError> {
    let status = loop {
        match waitpid(pid, None) {
            Ok(status) => break status,
            Err(Errno::EINTR) => continue,
            Err(source) => {
                return Err(ExecutionError::Wait {
                    command: command.to_string(),
                    pid: pid.as_raw(),
                    source,
                });
            }
        }
    };
    log::debug!("Reaped pid {} ('{}'): {:?}", pid, command, status);
    check_status(pid, command, status)
}

fn check_status(pid: Pid, command: &str, status: WaitStatus) -> Result<(), ExecutionError> {
    match status {
        WaitStatus::Exited(reaped, 0) if reaped == pid => Ok(()),
        WaitStatus::Exited(reaped, code) if reaped == pid => Err(ExecutionError::NonZeroExit {
            command: command.to_string(),
            code,
        }),
        WaitStatus::Signaled(reaped, signal, _) if reaped == pid => {
            Err(ExecutionError::Signaled {
                command: command.to_string(),
                signal: signal as i32,
            })
        }
        _ => Err(ExecutionError::WaitMismatch {
            command: command.to_string(),
            pid: pid.as_raw(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::sys::signal::Signal;
    use std::process::Command;

    fn spawn_sh(script: &str) -> Pid {
        let child = Command::new("/bin/sh").arg("-c").arg(script).spawn().unwrap();
        Pid::from_raw(i32::try_from(child.id()).unwrap())
    }

    #[test]
    fn test_zero_exit_is_success() {
        let pid = spawn_sh("exit 0");
        assert!(wait_for(pid, "exit 0").is_ok());
    }

    #[test]
    fn test_non_zero_exit_names_command_and_code() {
        let pid = spawn_sh("exit 42");
        let err = wait_for(pid, "exit 42").unwrap_err();
        assert!(matches!(err, ExecutionError::NonZeroExit { code: 42, .. }));
        assert_eq!(err.to_string(), "Command 'exit 42' exited with code 42");
    }

    #[test]
    fn test_waiting_twice_fails() {
        let pid = spawn_sh("true");
        wait_for(pid, "true").unwrap();
        let err = wait_for(pid, "true").unwrap_err();
        assert!(matches!(err, ExecutionError::Wait { source: Errno::ECHILD, .. }));
        assert!(err.to_string().contains("Cannot wait for command 'true'"));
    }

    #[test]
    fn test_reaped_pid_mismatch() {
        let status = WaitStatus::Exited(Pid::from_raw(11), 0);
        let err = check_status(Pid::from_raw(10), "sleep 1", status).unwrap_err();
        assert!(matches!(err, ExecutionError::WaitMismatch { pid: 10, .. }));
        assert_eq!(err.to_string(), "Cannot wait for command 'sleep 1' (pid 10)");
    }

    #[test]
    fn test_signaled_child_is_a_failure() {
        let pid = Pid::from_raw(10);
        let status = WaitStatus::Signaled(pid, Signal::SIGTERM, false);
        let err = check_status(pid, "yes", status).unwrap_err();
        assert!(matches!(err, ExecutionError::Signaled { signal: 15, .. }));
    }

    #[test]
    fn test_still_alive_is_a_mismatch() {
        let err = check_status(Pid::from_raw(10), "cat", WaitStatus::StillAlive).unwrap_err();
        assert!(matches!(err, ExecutionError::WaitMismatch { .. }));
    }
}

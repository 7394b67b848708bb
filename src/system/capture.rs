// src/system/capture.rs

//! Runs a command line under `shell -c` in a forked child and collects everything it
//! writes to standard output.
//!
//! The protocol is deliberately explicit:
//!
//! 1. allocate a pipe,
//! 2. fork,
//! 3. in the parent, close the write end, drain the read end until end-of-stream,
//!    close it and only then reap the child,
//! 4. in the child, point stdin at the null device and stdout at the pipe, then
//!    replace the process image with the shell.
//!
//! Pipe ends are `OwnedFd`s, so every early return in the parent closes them. The
//! child works on raw descriptors because it never returns.

#![allow(unsafe_code)]

use crate::{
    constants::{
        CHILD_EXEC_FAILURE_STATUS, NULL_DEVICE, STDERR_FILENO, STDIN_FILENO, STDOUT_FILENO,
    },
    system::{executor::ExecutionError, wait},
};
use nix::{
    errno::Errno,
    fcntl::{self, FcntlArg, FdFlag, OFlag},
    sys::stat::Mode,
    unistd::{self, ForkResult},
};
use std::{
    ffi::{CStr, CString},
    fs::File,
    io::{ErrorKind, Read},
    os::{
        fd::{IntoRawFd, OwnedFd, RawFd},
        raw::c_char,
        unix::ffi::OsStrExt,
    },
    path::Path,
    ptr,
};

const SHELL_COMMAND_FLAG: &CStr = c"-c";

/// The exec arguments for `shell -c command_line`, built before forking so the
/// child never has to allocate.
struct ShellInvocation {
    shell: CString,
    command: CString,
}

impl ShellInvocation {
    fn new(shell: &Path, command_line: &str) -> Result<Self, ExecutionError> {
        let invalid = |source| ExecutionError::InvalidCommand {
            command: command_line.to_string(),
            source,
        };
        Ok(Self {
            shell: CString::new(shell.as_os_str().as_bytes()).map_err(invalid)?,
            command: CString::new(command_line).map_err(invalid)?,
        })
    }

    /// Null-terminated argv. The pointers borrow from `self`.
    fn argv(&self) -> [*const c_char; 4] {
        [
            self.shell.as_ptr(),
            SHELL_COMMAND_FLAG.as_ptr(),
            self.command.as_ptr(),
            ptr::null(),
        ]
    }
}

/// Runs `command_line` with `shell -c` and returns its standard output.
///
/// The child's stdin is the null device and its stderr is inherited. Output is read
/// in chunks of at most `chunk_size` bytes and returned in full once the child closes
/// its end of the pipe; the child is reaped afterwards and must exit with status zero.
pub fn capture_output(
    shell: &Path,
    command_line: &str,
    chunk_size: usize,
) -> Result<Vec<u8>, ExecutionError> {
    let invocation = ShellInvocation::new(shell, command_line)?;
    let argv = invocation.argv();

    let (read_end, write_end) = open_pipe().map_err(|source| ExecutionError::Pipe {
        command: command_line.to_string(),
        source,
    })?;

    // SAFETY: the child branch only makes async-signal-safe calls (open, dup2, fcntl,
    // close, execv, write, _exit) on data prepared above, and it never returns.
    match unsafe { unistd::fork() } {
        Err(source) => Err(ExecutionError::Fork {
            command: command_line.to_string(),
            source,
        }),
        Ok(ForkResult::Child) => exec_child(&invocation.shell, &argv, read_end, write_end),
        Ok(ForkResult::Parent { child }) => {
            drop(write_end);
            log::debug!("Capturing '{}' from pid {}", command_line, child);

            match drain(read_end, chunk_size) {
                Ok(output) => {
                    wait::wait_for(child, command_line)?;
                    Ok(output)
                }
                Err(source) => {
                    // The read end is closed by now, so the child cannot block on a full pipe.
                    if let Err(e) = wait::wait_for(child, command_line) {
                        log::debug!("Ignoring child status after read failure: {}", e);
                    }
                    Err(ExecutionError::Read {
                        command: command_line.to_string(),
                        source,
                    })
                }
            }
        }
    }
}

/// Reads `read_end` until end-of-stream, keeping each non-empty chunk in arrival
/// order, and concatenates them. The descriptor is closed on return.
fn drain(read_end: OwnedFd, chunk_size: usize) -> std::io::Result<Vec<u8>> {
    let mut pipe = File::from(read_end);
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut chunks: Vec<Vec<u8>> = Vec::new();

    loop {
        match pipe.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => chunks.push(buf.get(..n).unwrap_or_default().to_vec()),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    log::trace!("Drained {} chunk(s)", chunks.len());
    Ok(chunks.concat())
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn open_pipe() -> nix::Result<(OwnedFd, OwnedFd)> {
    unistd::pipe2(OFlag::O_CLOEXEC)
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn open_pipe() -> nix::Result<(OwnedFd, OwnedFd)> {
    use std::os::fd::AsRawFd;

    let (read_end, write_end) = unistd::pipe()?;
    for fd in [&read_end, &write_end] {
        fcntl::fcntl(fd.as_raw_fd(), FcntlArg::F_SETFD(FdFlag::FD_CLOEXEC))?;
    }
    Ok((read_end, write_end))
}

/// Body of the forked child. Either the shell replaces this process image or the
/// child exits with [`CHILD_EXEC_FAILURE_STATUS`]; errors cannot be returned because
/// no caller in this process will ever look at them.
fn exec_child(
    shell: &CStr,
    argv: &[*const c_char; 4],
    read_end: OwnedFd,
    write_end: OwnedFd,
) -> ! {
    let read_fd = read_end.into_raw_fd();
    let write_fd = match move_off_stdin(write_end.into_raw_fd()) {
        Ok(fd) => fd,
        Err(errno) => child_abort("cannot move pipe off stdin", errno),
    };

    if let Err(errno) = redirect_stdin_to_null() {
        child_abort("cannot open null device as stdin", errno);
    }
    // If the read end sat on fd 0 it was just replaced by the null device.
    if read_fd != STDIN_FILENO {
        let _ = unistd::close(read_fd);
    }
    if let Err(errno) = redirect_stdout_to(write_fd) {
        child_abort("cannot redirect stdout to pipe", errno);
    }

    // SAFETY: `shell` and every non-null entry of `argv` point into CStrings owned by
    // the parent's frame, which this copy of the address space keeps alive.
    unsafe {
        libc::execv(shell.as_ptr(), argv.as_ptr());
    }
    child_abort("cannot exec shell", Errno::last())
}

/// Ensures the pipe's write end does not occupy fd 0, which is about to be
/// overwritten by the null device.
fn move_off_stdin(fd: RawFd) -> nix::Result<RawFd> {
    if fd != STDIN_FILENO {
        return Ok(fd);
    }
    let moved = fcntl::fcntl(fd, FcntlArg::F_DUPFD(STDERR_FILENO + 1))?;
    unistd::close(fd)?;
    Ok(moved)
}

fn redirect_stdin_to_null() -> nix::Result<()> {
    let null_fd = fcntl::open(NULL_DEVICE, OFlag::O_RDONLY, Mode::empty())?;
    if null_fd != STDIN_FILENO {
        unistd::dup2(null_fd, STDIN_FILENO)?;
        unistd::close(null_fd)?;
    }
    Ok(())
}

fn redirect_stdout_to(write_fd: RawFd) -> nix::Result<()> {
    if write_fd == STDOUT_FILENO {
        // dup2 onto itself would keep close-on-exec set.
        fcntl::fcntl(write_fd, FcntlArg::F_SETFD(FdFlag::empty()))?;
        return Ok(());
    }
    unistd::dup2(write_fd, STDOUT_FILENO)?;
    unistd::close(write_fd)?;
    Ok(())
}

/// Best-effort diagnostic on stderr, then exit without running destructors or
/// `atexit` handlers inherited from the parent.
fn child_abort(context: &'static str, errno: Errno) -> ! {
    let parts: [&[u8]; 5] = [
        b"shellrun: ",
        context.as_bytes(),
        b": ",
        errno.desc().as_bytes(),
        b"\n",
    ];
    for part in parts {
        // SAFETY: `part` is a live byte slice; write(2) reads at most `part.len()` bytes.
        let _ = unsafe { libc::write(STDERR_FILENO, part.as_ptr().cast(), part.len()) };
    }
    // SAFETY: _exit(2) is async-signal-safe and skips the parent's atexit handlers
    // and stdio buffers, which this forked copy must not flush.
    unsafe { libc::_exit(CHILD_EXEC_FAILURE_STATUS) }
}

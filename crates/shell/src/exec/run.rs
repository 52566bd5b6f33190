// SPDX-License-Identifier: MIT

//! Statement evaluation: and-or chains, pipelines, builtins, and
//! external process spawning.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tracing::{debug, trace};

use crate::ast::{AndOrList, LogicalOp, Pipeline, SimpleCommand};
use crate::span::Span;

use super::error::ExecError;
use super::Session;

/// Names the session dispatches without spawning a process.
const BUILTINS: &[&str] = &["cd", "echo", "exit", "export", "pwd", "unset"];

/// Result of one fully evaluated chain: the final status plus the last
/// command that produced it, for error reporting.
pub(crate) struct ChainOutcome {
    pub status: i32,
    pub command: String,
    pub span: Span,
}

/// Result of one pipeline stage.
struct StageOutput {
    status: i32,
    /// Captured stdout when the stage feeds a later one.
    output: Option<Vec<u8>>,
}

impl StageOutput {
    fn silent(capture: bool) -> Self {
        StageOutput {
            status: 0,
            output: capture.then(Vec::new),
        }
    }
}

/// Write builtin output to the real stdout, or hand it to the next
/// pipeline stage.
async fn emit(bytes: Vec<u8>, capture: bool) -> Result<StageOutput, ExecError> {
    if capture {
        return Ok(StageOutput {
            status: 0,
            output: Some(bytes),
        });
    }
    let mut stdout = tokio::io::stdout();
    let write = async {
        stdout.write_all(&bytes).await?;
        stdout.flush().await
    };
    write.await.map_err(|source| ExecError::Io {
        context: "writing to stdout".to_string(),
        source,
    })?;
    Ok(StageOutput {
        status: 0,
        output: None,
    })
}

impl Session {
    pub(crate) async fn eval_and_or(
        &mut self,
        statement: &AndOrList,
    ) -> Result<ChainOutcome, ExecError> {
        let mut outcome = self.eval_pipeline(&statement.first).await?;
        for (op, pipeline) in &statement.rest {
            let take_branch = match op {
                LogicalOp::And => outcome.status == 0,
                LogicalOp::Or => outcome.status != 0,
            };
            if take_branch {
                outcome = self.eval_pipeline(pipeline).await?;
            }
        }
        Ok(outcome)
    }

    /// Evaluate pipeline stages left to right, carrying each stage's
    /// captured stdout into the next stage's stdin. The pipeline's
    /// status is its last stage's status.
    async fn eval_pipeline(&mut self, pipeline: &Pipeline) -> Result<ChainOutcome, ExecError> {
        let stages = pipeline.commands.len();
        let mut carry: Option<Vec<u8>> = None;
        let mut outcome = ChainOutcome {
            status: 0,
            command: String::new(),
            span: pipeline.span,
        };
        for (index, command) in pipeline.commands.iter().enumerate() {
            let capture = index + 1 < stages;
            let (status, name, output) = self
                .eval_simple(command, carry.take(), capture)
                .await?;
            outcome = ChainOutcome {
                status,
                command: name,
                span: command.span,
            };
            carry = output;
        }
        self.last_status = outcome.status;
        Ok(outcome)
    }

    async fn eval_simple(
        &mut self,
        command: &SimpleCommand,
        input: Option<Vec<u8>>,
        capture: bool,
    ) -> Result<(i32, String, Option<Vec<u8>>), ExecError> {
        let mut overlay: Vec<(String, String)> = Vec::new();
        for assignment in &command.env {
            let (value, _) = self.expand_word(&assignment.value);
            overlay.push((assignment.name.clone(), value));
        }

        let Some(name_word) = &command.name else {
            for (name, value) in overlay {
                self.vars.insert(name, value);
            }
            let out = StageOutput::silent(capture);
            return Ok((out.status, "assignment".to_string(), out.output));
        };

        let (name, _) = self.expand_word(name_word);
        let args = self.expand_args(&command.args);

        let out = if BUILTINS.contains(&name.as_str()) {
            trace!(builtin = %name, "dispatching builtin");
            // Assignment prefixes on a builtin persist in the session.
            for (n, v) in overlay {
                self.vars.insert(n, v);
            }
            self.builtin(&name, &args, command.span, capture).await?
        } else {
            self.spawn_external(&name, &args, &overlay, input, capture, command.span)
                .await?
        };
        Ok((out.status, name, out.output))
    }

    async fn builtin(
        &mut self,
        name: &str,
        args: &[String],
        span: Span,
        capture: bool,
    ) -> Result<StageOutput, ExecError> {
        match name {
            "exit" => {
                let code = match args.first() {
                    None => self.last_status,
                    Some(arg) => arg.parse::<i32>().map_err(|_| ExecError::Builtin {
                        command: "exit".to_string(),
                        message: format!("numeric argument required, got '{arg}'"),
                        span,
                    })?,
                };
                Err(ExecError::Exit { code })
            }
            "cd" => {
                self.builtin_cd(args, span)?;
                Ok(StageOutput::silent(capture))
            }
            "echo" => {
                let mut line = args.join(" ");
                line.push('\n');
                emit(line.into_bytes(), capture).await
            }
            "pwd" => emit(format!("{}\n", self.cwd.display()).into_bytes(), capture).await,
            "export" => {
                for arg in args {
                    match arg.split_once('=') {
                        Some((n, v)) if crate::token::is_valid_variable_name(n) => {
                            self.vars.insert(n.to_string(), v.to_string());
                            self.exported.insert(n.to_string());
                        }
                        None if crate::token::is_valid_variable_name(arg) => {
                            self.exported.insert(arg.clone());
                        }
                        _ => {
                            return Err(ExecError::Builtin {
                                command: "export".to_string(),
                                message: format!("invalid name: '{arg}'"),
                                span,
                            })
                        }
                    }
                }
                Ok(StageOutput::silent(capture))
            }
            "unset" => {
                for arg in args {
                    self.vars.remove(arg);
                    self.exported.remove(arg);
                }
                Ok(StageOutput::silent(capture))
            }
            other => Err(ExecError::Builtin {
                command: other.to_string(),
                message: "not a builtin".to_string(),
                span,
            }),
        }
    }

    fn builtin_cd(&mut self, args: &[String], span: Span) -> Result<(), ExecError> {
        if args.len() > 1 {
            return Err(ExecError::Builtin {
                command: "cd".to_string(),
                message: "too many arguments".to_string(),
                span,
            });
        }
        let target = match args.first() {
            Some(dir) if Path::new(dir).is_absolute() => PathBuf::from(dir),
            Some(dir) => self.cwd.join(dir),
            None => std::env::var_os("HOME")
                .map(PathBuf::from)
                .ok_or_else(|| ExecError::Builtin {
                    command: "cd".to_string(),
                    message: "HOME not set".to_string(),
                    span,
                })?,
        };
        let metadata = std::fs::metadata(&target).map_err(|source| ExecError::Io {
            context: format!("cd: {}", target.display()),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ExecError::Builtin {
                command: "cd".to_string(),
                message: format!("not a directory: {}", target.display()),
                span,
            });
        }
        self.cwd = target.canonicalize().unwrap_or(target);
        Ok(())
    }

    async fn spawn_external(
        &mut self,
        name: &str,
        args: &[String],
        overlay: &[(String, String)],
        input: Option<Vec<u8>>,
        capture: bool,
        span: Span,
    ) -> Result<StageOutput, ExecError> {
        debug!(command = %name, "spawning external command");
        let mut command = tokio::process::Command::new(name);
        command.args(args).current_dir(&self.cwd);
        for exported in &self.exported {
            if let Some(value) = self.vars.get(exported) {
                command.env(exported, value);
            }
        }
        for (n, v) in overlay {
            command.env(n, v);
        }
        if input.is_some() {
            command.stdin(Stdio::piped());
        }
        if capture {
            command.stdout(Stdio::piped());
        }

        let mut child = command.spawn().map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ExecError::CommandNotFound {
                    command: name.to_string(),
                    span,
                }
            } else {
                ExecError::SpawnFailed {
                    command: name.to_string(),
                    source,
                    span,
                }
            }
        })?;

        if let Some(bytes) = input {
            if let Some(mut stdin) = child.stdin.take() {
                if let Err(source) = stdin.write_all(&bytes).await {
                    // A stage that stops reading early is not an error.
                    if source.kind() != ErrorKind::BrokenPipe {
                        return Err(ExecError::Io {
                            context: format!("writing stdin of {name}"),
                            source,
                        });
                    }
                }
            }
        }

        let wait_err = |source| ExecError::Io {
            context: format!("waiting for {name}"),
            source,
        };
        if capture {
            let output = child.wait_with_output().await.map_err(wait_err)?;
            Ok(StageOutput {
                status: output.status.code().unwrap_or(1),
                output: Some(output.stdout),
            })
        } else {
            let status = child.wait().await.map_err(wait_err)?;
            Ok(StageOutput {
                status: status.code().unwrap_or(1),
                output: None,
            })
        }
    }
}

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use objcull::session::Collaborator;
use tracing::warn;
use crate::config::Config;

const DEFAULT_OUTPUT_NAME: &str = "modified_model.obj";

/// Answers the session's questions from the configuration first and falls
/// back to asking on the console.
pub(crate) struct ConsolePrompt<R, W> {
    input: Option<PathBuf>,
    vertices: Vec<usize>,
    output: Option<PathBuf>,
    overwrite: bool,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {

    pub(crate) fn new(config: &Config, reader: R, writer: W) -> Self {
        ConsolePrompt {
            input: config.input.path.clone(),
            vertices: config.removal.vertices.clone(),
            output: config.output.path.clone(),
            overwrite: config.output.overwrite,
            reader,
            writer,
        }
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        // A closed stdout only loses the question, not the answer.
        let _ = write!(self.writer, "{}", question);
        let _ = self.writer.flush();

        let mut answer = String::new();
        match self.reader.read_line(&mut answer) {
            Ok(0) => None,
            Ok(_) => Some(answer.trim().to_string()),
            Err(e) => {
                warn!("Failed to read from console: {}", e);
                None
            }
        }
    }

    /// Reads whitespace separated indices until `-1` or end of input.
    fn read_indices(&mut self) -> Vec<usize> {
        let _ = writeln!(self.writer, "Enter vertex indices to remove (-1 to finish):");
        let _ = self.writer.flush();

        let mut indices = Vec::new();
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!("Failed to read from console: {}", e);
                    break;
                }
            }

            for word in line.split_whitespace() {
                match word.parse::<i64>() {
                    Ok(-1) => return indices,
                    Ok(value) => match usize::try_from(value) {
                        Ok(index) => indices.push(index),
                        Err(_) => warn!("Skipping negative index: {}", value),
                    },
                    Err(_) => warn!("Skipping non-numeric value: {}", word),
                }
            }
        }
        indices
    }
}

impl<R: BufRead, W: Write> Collaborator for ConsolePrompt<R, W> {

    fn select_input_path(&mut self) -> Option<PathBuf> {
        if let Some(input) = self.input.take() {
            return Some(input);
        }
        self.ask("Model file: ")
            .filter(|answer| !answer.is_empty())
            .map(PathBuf::from)
    }

    fn prompt_vertex_indices(&mut self) -> Vec<usize> {
        if !self.vertices.is_empty() {
            return std::mem::take(&mut self.vertices);
        }
        self.read_indices()
    }

    fn select_output_path(&mut self, default_path: &Path) -> Option<PathBuf> {
        if self.overwrite {
            return Some(default_path.to_path_buf());
        }
        if let Some(output) = self.output.take() {
            return Some(with_obj_extension(output));
        }

        let suggestion = default_path.with_file_name(DEFAULT_OUTPUT_NAME);
        let answer = self.ask(&format!("Save as [{}]: ", suggestion.display()))?;
        let chosen = if answer.is_empty() { suggestion } else { PathBuf::from(answer) };
        Some(with_obj_extension(chosen))
    }
}

fn with_obj_extension(path: PathBuf) -> PathBuf {
    let has_extension = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("obj"));
    if has_extension {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".obj");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(config: &Config, stdin: &str) -> ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompt::new(config, Cursor::new(stdin.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn indices_stop_at_terminator_and_skip_garbage() {
        let mut console = prompt(&Config::default(), "3 x 1\n-4 7 -1 9\n");
        assert_eq!(console.prompt_vertex_indices(), vec![3, 1, 7]);
    }

    #[test]
    fn indices_end_at_eof() {
        let mut console = prompt(&Config::default(), "0 2");
        assert_eq!(console.prompt_vertex_indices(), vec![0, 2]);
    }

    #[test]
    fn configured_values_win_over_console() {
        let mut config = Config::default();
        config.input.path = Some(PathBuf::from("model.obj"));
        config.removal.vertices = vec![5];
        config.output.path = Some(PathBuf::from("edited"));
        let mut console = prompt(&config, "ignored\n");

        assert_eq!(console.select_input_path(), Some(PathBuf::from("model.obj")));
        assert_eq!(console.prompt_vertex_indices(), vec![5]);
        assert_eq!(
            console.select_output_path(Path::new("model.obj")),
            Some(PathBuf::from("edited.obj"))
        );
    }

    #[test]
    fn blank_input_path_abandons() {
        let mut console = prompt(&Config::default(), "\n");
        assert_eq!(console.select_input_path(), None);
        let mut console = prompt(&Config::default(), "");
        assert_eq!(console.select_input_path(), None);
    }

    #[test]
    fn overwrite_returns_the_default() {
        let mut config = Config::default();
        config.output.overwrite = true;
        let mut console = prompt(&config, "");
        assert_eq!(
            console.select_output_path(Path::new("dir/model.obj")),
            Some(PathBuf::from("dir/model.obj"))
        );
    }

    #[test]
    fn output_suggestion_sits_next_to_input() {
        let mut console = prompt(&Config::default(), "\n");
        assert_eq!(
            console.select_output_path(Path::new("dir/model.obj")),
            Some(PathBuf::from("dir/modified_model.obj"))
        );

        let mut console = prompt(&Config::default(), "out/result.OBJ\n");
        assert_eq!(
            console.select_output_path(Path::new("dir/model.obj")),
            Some(PathBuf::from("out/result.OBJ"))
        );
    }
}

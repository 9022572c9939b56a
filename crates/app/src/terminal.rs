use std::io::{self, BufRead, Write};

use assessment_core::model::Stage;
use services::{AssessmentController, AssessmentError};
use thiserror::Error;
use tracing::debug;

use crate::vm::{QuestionVm, map_questions, map_result, map_stage_copy};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TerminalError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

/// Line-oriented front-end: one prompt per question, numeric choices.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run assessments until the respondent declines another one or input ends.
    ///
    /// # Errors
    ///
    /// Returns `TerminalError::Io` on read/write failures and
    /// `TerminalError::Assessment` if the controller rejects a selection.
    pub fn run(&mut self, controller: &mut AssessmentController) -> Result<(), TerminalError> {
        writeln!(self.output, "Industry 4.0 Assessment Tool")?;
        writeln!(self.output, "Evaluate your digital transformation progress")?;

        loop {
            if controller.stage() == Stage::Result {
                self.render_result(controller)?;
                if !self.confirm("Start New Assessment? [y/N] ")? {
                    return Ok(());
                }
                controller.reset();
                continue;
            }

            if !self.ask_stage(controller)? {
                return Ok(());
            }
            match controller.advance() {
                Ok(stage) => debug!(stage = %stage, "stage submitted"),
                Err(err) if err.is_user_facing() => writeln!(self.output, "{err}")?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Ask every question of the current stage. Returns `false` on end of input.
    fn ask_stage(&mut self, controller: &mut AssessmentController) -> Result<bool, TerminalError> {
        let Some(copy) = map_stage_copy(controller.stage()) else {
            return Ok(true);
        };
        let Some(set) = controller.current_question_set() else {
            return Ok(true);
        };
        let questions = map_questions(set, controller.answers());

        writeln!(self.output)?;
        writeln!(self.output, "== {} ==", copy.heading)?;
        writeln!(self.output, "{}", copy.intro)?;

        for question in &questions {
            let Some(score) = self.ask_question(question)? else {
                return Ok(false);
            };
            controller.record_answer(question.index, score)?;
        }

        let progress = controller.stage_progress();
        writeln!(
            self.output,
            "Answered {} of {} questions.",
            progress.answered, progress.total
        )?;
        writeln!(self.output, "[{}]", copy.submit_label)?;
        Ok(true)
    }

    fn ask_question(&mut self, question: &QuestionVm) -> Result<Option<u32>, TerminalError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}. {}", question.index + 1, question.prompt)?;
        for option in &question.options {
            let marker = if option.selected { "*" } else { " " };
            writeln!(self.output, " {marker}{}) {}", option.key, option.label)?;
        }

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let choice = line
                .parse::<usize>()
                .ok()
                .and_then(|key| question.options.iter().find(|option| option.key == key));
            match choice {
                Some(option) => return Ok(Some(option.score)),
                None => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}.",
                    question.options.len()
                )?,
            }
        }
    }

    fn render_result(&mut self, controller: &AssessmentController) -> Result<(), TerminalError> {
        let vm = map_result(&controller.result_view()?);

        writeln!(self.output)?;
        writeln!(self.output, "== {} ==", vm.level_title)?;
        writeln!(self.output, "{}", vm.level_caption)?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", vm.progress_title)?;
        writeln!(self.output, "{}", vm.journey_label)?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", vm.details_title)?;
        for item in &vm.items {
            writeln!(
                self.output,
                "- {} {} ({})",
                item.prompt, item.score_label, item.percent_label
            )?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", vm.recommendations_title)?;
        for recommendation in &vm.recommendations {
            writeln!(self.output, "-> {recommendation}")?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "[{}]", vm.reset_label)?;
        Ok(())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, TerminalError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|line| matches!(line.to_ascii_lowercase().as_str(), "y" | "yes")))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

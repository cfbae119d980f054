//! Transform a string with the default tag or a pipeline

use bridge::output::{ErrorOutput, OutputMode, TransformOutput};
use bridge::transform::{transform as tag, transform_safe};
use bridge::{Pipeline, Step};

/// Transform `input` and print the result
pub fn transform(
    input: &str,
    safe: bool,
    pipeline: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (result, steps) = match pipeline {
        Some(spec) => {
            let pipeline = Pipeline::parse(spec)?;
            let result = if safe {
                pipeline.apply_safe(input)
            } else {
                Ok(pipeline.apply(input))
            };
            (result, pipeline.steps().iter().map(ToString::to_string).collect::<Vec<_>>())
        },
        None => {
            let result = if safe { transform_safe(input) } else { Ok(tag(input)) };
            (result, vec![Step::Tag.to_string()])
        },
    };

    match result {
        Ok(output) => {
            TransformOutput {
                input: input.to_string(),
                output,
                steps,
            }
            .render(mode);
            Ok(())
        },
        Err(e) => {
            ErrorOutput::new(&e).render(mode);
            std::process::exit(1);
        },
    }
}

//! Fix the latest post

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::content::{ContentLoader, Post};
use crate::normalize::{Counts, Fix, Normalizer};
use crate::prompt;
use crate::DevChars;

/// Question asked before rewriting the post
pub const QUESTION: &str = "Replace characters? [Y/n] ";

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fixes applied and the post rewritten
    Applied,
    /// User declined, post untouched
    Declined,
    /// Only counted, never asked
    DryRun,
}

/// Options for the fix command
#[derive(Debug, Clone, Copy, Default)]
pub struct FixOptions {
    /// Count and report without asking or writing
    pub dry_run: bool,
    /// Answer yes without reading input
    pub assume_yes: bool,
}

/// The latest post together with its issue counts
pub struct Inspection {
    pub post: Post,
    pub counts: Counts,
    pub normalizer: Normalizer,
}

/// Load the latest post, count its issues and print the summary
pub fn inspect<W: Write>(app: &DevChars, output: &mut W) -> Result<Inspection> {
    let normalizer = Normalizer::new(&app.config.blog_host)?;
    let loader = ContentLoader::new(&app.posts_dir);
    let post = loader.load_latest()?;

    let counts = normalizer.count(&post.raw);
    tracing::debug!("Counts for {}: {:?}", post.name, counts);

    writeln!(output, "Reading latest post {}", post.name)?;
    writeln!(output, "{}", counts.summary())?;

    Ok(Inspection {
        post,
        counts,
        normalizer,
    })
}

/// Count issues in the latest post and, once confirmed, rewrite it
pub fn run<R, W>(
    app: &DevChars,
    options: FixOptions,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    let inspection = inspect(app, output)?;

    if options.dry_run {
        return Ok(Outcome::DryRun);
    }

    let accepted = options.assume_yes || prompt::confirm(input, output, QUESTION)?;
    if !accepted {
        return Ok(Outcome::Declined);
    }

    apply(&inspection, output)?;
    Ok(Outcome::Applied)
}

/// Apply every fix to an inspected post, report each one and write it back
pub fn apply<W: Write>(inspection: &Inspection, output: &mut W) -> Result<()> {
    let Inspection {
        post,
        counts,
        normalizer,
    } = inspection;

    writeln!(output)?;
    let contents =
        normalizer.apply_each(&post.raw, |fix| writeln!(output, "{}", fix.report(counts)))?;

    post.save(&contents)?;
    tracing::info!("Rewrote {:?}", post.full_source);

    Ok(())
}

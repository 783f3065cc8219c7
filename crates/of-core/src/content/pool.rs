//! The built-in statement pool.
//!
//! Responses are listed in button order: slide, counter, empathize, question.

use crate::category::ResponseCategory::{self, Counter, Deflect, Empathize, Question};
use crate::content::{Statement, StatementKind};

type Entry = (&'static str, ResponseCategory, StatementKind, [&'static str; 4]);

const POOL: &[Entry] = &[
    // Answer with a question
    (
        "\"Didn't you say that before?\"",
        Question,
        StatementKind::Doubt,
        [
            "\"...Did I?\"",
            "\"I'll check the minutes.\"",
            "\"Sorry, could you say that again?\"",
            "\"When did I say it?\"",
        ],
    ),
    (
        "\"Are you really sure about that?\"",
        Question,
        StatementKind::Concern,
        [
            "\"Yes, it's fine.\"",
            "\"Here's the rationale.\"",
            "\"Thank you for your concern.\"",
            "\"Which part worries you?\"",
        ],
    ),
    (
        "\"Who decided that?\"",
        Question,
        StatementKind::Doubt,
        [
            "\"The team decided.\"",
            "\"Here's the reasoning.\"",
            "\"We talked it over together.\"",
            "\"Whose approval do we need?\"",
        ],
    ),
    (
        "\"Did you think about the risks?\"",
        Question,
        StatementKind::Concern,
        [
            "\"Yes, I did.\"",
            "\"Here are the countermeasures.\"",
            "\"Thanks for pointing that out.\"",
            "\"Which risks do you have in mind?\"",
        ],
    ),
    // Correct the logic
    (
        "\"There's surely a better way.\"",
        Counter,
        StatementKind::Suggestion,
        [
            "\"Maybe so.\"",
            "\"Please tell me your concrete idea.\"",
            "\"Please, do make a suggestion.\"",
            "\"What kind of way?\"",
        ],
    ),
    (
        "\"Is there a precedent?\"",
        Counter,
        StatementKind::Doubt,
        [
            "\"I'll look into it.\"",
            "\"It's a new attempt.\"",
            "\"That's good to know.\"",
            "\"Do we need a precedent?\"",
        ],
    ),
    (
        "\"Is there even any point to that?\"",
        Counter,
        StatementKind::Doubt,
        [
            "\"I think there is.\"",
            "\"This is the goal.\"",
            "\"I'll think it over.\"",
            "\"Which part seems doubtful?\"",
        ],
    ),
    // Let it slide
    (
        "\"Well, if it were me, I'd do it like this.\"",
        Deflect,
        StatementKind::Ego,
        [
            "\"I see, I'll keep that in mind.\"",
            "\"That's one option too.\"",
            "\"As expected of you.\"",
            "\"Please tell me more.\"",
        ],
    ),
    (
        "\"Well, do whatever you like.\"",
        Deflect,
        StatementKind::Passive,
        [
            "\"Thank you.\"",
            "\"Let me confirm the direction.\"",
            "\"Could I hear your opinion?\"",
            "\"Are you really okay with that?\"",
        ],
    ),
    (
        "\"In my experience...\"",
        Deflect,
        StatementKind::Story,
        [
            "\"That's very instructive.\"",
            "\"In this case, though...\"",
            "\"What a valuable story.\"",
            "\"When was that?\"",
        ],
    ),
    (
        "\"Hmm, is that so.\"",
        Deflect,
        StatementKind::Dismissive,
        [
            "\"Yes, it is.\"",
            "\"Let me explain the details.\"",
            "\"Does that make sense?\"",
            "\"Is anything bothering you?\"",
        ],
    ),
    // Empathize
    (
        "\"Well, good luck with that.\"",
        Empathize,
        StatementKind::Passive,
        [
            "\"I'll do my best.\"",
            "\"I'd appreciate your support.\"",
            "\"Thank you.\"",
            "\"What exactly should I do?\"",
        ],
    ),
    (
        "\"Young people's ideas sure are interesting.\"",
        Empathize,
        StatementKind::Patronizing,
        [
            "\"Is that so.\"",
            "\"It's based on data.\"",
            "\"I'm honored by the compliment.\"",
            "\"What's interesting about it?\"",
        ],
    ),
    (
        "\"I'm not against it, but...\"",
        Empathize,
        StatementKind::Passive,
        [
            "\"Understood.\"",
            "\"Please tell me your concerns.\"",
            "\"Thank you for understanding.\"",
            "\"What's holding you back?\"",
        ],
    ),
    (
        "\"Is it really going to be okay?\"",
        Empathize,
        StatementKind::Concern,
        [
            "\"It'll be fine.\"",
            "\"Here's how I'm preparing.\"",
            "\"Thank you for worrying about me.\"",
            "\"What would reassure you?\"",
        ],
    ),
];

/// Materialize the built-in pool.
pub(super) fn builtin_statements() -> Vec<Statement> {
    POOL.iter()
        .map(|(text, correct, kind, responses)| Statement::new(*text, *correct, *kind, *responses))
        .collect()
}

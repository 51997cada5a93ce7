//! Fixed template bank shared by the fallback generator and the parser.

/// One copy message in the three style registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTemplate {
    pub professional: &'static str,
    pub cute: &'static str,
    pub aggressive: &'static str,
}

/// Tone sentences; `{brand}` is replaced with the brand name.
pub const TONE_TEMPLATES: [&str; 3] = [
    "{brand}'s tone is concise and memorable, using short sentences and a few key words to convey attitude.",
    "{brand} emphasizes authenticity and approachability, with a conversational style that feels close to the audience.",
    "{brand} focuses on rhythm and repetition, making copy easy to remember at a glance.",
];

pub const COPY_TEMPLATES: [CopyTemplate; 10] = [
    CopyTemplate {
        professional: "Our new release is live. Quality and experience are rigorously vetted—worth trying first.",
        cute: "New drop is here~ Super easy to use, give it a try!",
        aggressive: "It's out. Try it or don't—your call.",
    },
    CopyTemplate {
        professional: "Limited-time offer in progress. We recommend completing your order during the promotion for the best price.",
        cute: "Limited offer~ Miss it and you'll wait forever. Go for it!",
        aggressive: "Limited time. No second chances.",
    },
    CopyTemplate {
        professional: "Materials and craftsmanship meet clear standards. You can choose with confidence.",
        cute: "Really reliable—picking us is never wrong~",
        aggressive: "Quality speaks. Don't like it? Don't buy.",
    },
    CopyTemplate {
        professional: "We respond to every choice you make with professional service and after-sales support.",
        cute: "You choose us, we've got you~",
        aggressive: "You chose. We deliver. No regrets.",
    },
    CopyTemplate {
        professional: "Design prioritizes ease of use so you can complete the main task in one step.",
        cute: "So simple—you'll get it in one go!",
        aggressive: "Simple. One step. Done.",
    },
    CopyTemplate {
        professional: "Real user feedback shows high satisfaction and repeat purchase rates.",
        cute: "Everyone who tried it loves it~ You should too!",
        aggressive: "Real users say it. Check the reviews.",
    },
    CopyTemplate {
        professional: "Orders placed today qualify for next-day delivery with reliable logistics.",
        cute: "Order today, get it tomorrow~ No long wait!",
        aggressive: "Order today. Get it tomorrow. That's it.",
    },
    CopyTemplate {
        professional: "We recommend choosing based on your needs—what fits you is what works best.",
        cute: "What fits you is best~ We're the right pick!",
        aggressive: "You know what fits. Choose right.",
    },
    CopyTemplate {
        professional: "Thank you for your trust. We will keep improving our products and service.",
        cute: "Thanks for the love~ We'll keep doing our best!",
        aggressive: "Thanks. We'll do better. Watch.",
    },
    CopyTemplate {
        professional: "We work with you to explore better solutions and experiences.",
        cute: "Let's discover more good things together~",
        aggressive: "Better is here. Keep up.",
    },
];

pub const SUGGEST_POOLS: [&[&str]; 3] = [
    &["quality", "reliable", "simple", "real", "trust", "worth", "curated", "pro", "care", "solid"],
    &["easy", "effortless", "efficient", "clear", "direct", "sincere", "accountable", "transparent", "steady", "safe"],
    &["experience", "detail", "standard", "support", "service", "quality", "real", "simple", "efficient", "trust"],
];

pub const AVOID_POOLS: [&[&str]; 3] = [
    &["best", "first", "absolute", "100%", "ever", "everywhere", "must-buy", "hype", "steal", "gimmick"],
    &["ultimate", "perfect", "unbeatable", "viral", "limited", "last chance", "don't miss", "regret", "cheap", "trick"],
    &["exaggerated", "fake", "overstated", "guaranteed", "always", "never", "strongest", "cheapest"],
];

/// Filler for copy blocks missing from a generated response.
pub const PLACEHOLDER_COPY: CopyTemplate = CopyTemplate {
    professional: "Quality content for your brand.",
    cute: "Something fun and engaging~",
    aggressive: "Bold statement. Direct action.",
};

/// Used when a response has no suggested-vocabulary block.
pub const DEFAULT_VOCAB_SUGGEST: [&str; 10] = [
    "quality", "reliable", "trusted", "innovative", "excellent", "professional", "authentic", "premium", "effective", "proven",
];

/// Used when a response has no avoid-vocabulary block.
pub const DEFAULT_VOCAB_AVOID: [&str; 10] = [
    "cheap", "fake", "guaranteed", "viral", "best ever", "perfect", "ultimate", "revolutionary", "miracle", "instant",
];

pub fn to_owned_words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

//! The built-in substitution entries, one per code point.

/// Every built-in `(code point, replacement)` pair.
///
/// Keys are unique and replacements are pure ASCII. Entries for letters that also have a
/// canonical decomposition (`č`, `ő`, `ё`, ...) are kept so that a direct lookup is total.
pub(super) const MAPPINGS: &[(char, &str)] = &[
    // Scandinavian letters.
    ('ø', "o"),
    ('Ø', "O"),
    ('æ', "ae"),
    ('Æ', "AE"),
    ('å', "a"),
    ('Å', "A"),

    // German sharp s.
    ('ß', "ss"),
    ('ẞ', "SS"),

    // French ligatures.
    ('œ', "oe"),
    ('Œ', "OE"),

    // Polish.
    ('ł', "l"),
    ('Ł', "L"),

    // Croatian, Serbian Latin.
    ('đ', "d"),
    ('Đ', "D"),

    // Icelandic thorn and eth.
    ('þ', "th"),
    ('Þ', "Th"),
    ('ð', "d"),
    ('Ð', "D"),

    // Turkish.
    ('ğ', "g"),
    ('Ğ', "G"),
    ('ı', "i"),
    ('İ', "I"),
    ('ş', "s"),
    ('Ş', "S"),

    // Czech and Slovak carons.
    ('č', "c"),
    ('Č', "C"),
    ('ř', "r"),
    ('Ř', "R"),
    ('š', "s"),
    ('Š', "S"),
    ('ž', "z"),
    ('Ž', "Z"),

    // Hungarian double acute.
    ('ő', "o"),
    ('Ő', "O"),
    ('ű', "u"),
    ('Ű', "U"),

    // Romanian breve and comma below.
    ('ă', "a"),
    ('Ă', "A"),
    ('ș', "s"),
    ('Ș', "S"),
    ('ț', "t"),
    ('Ț', "T"),

    // Cyrillic, lowercase.
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "yo"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "kh"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "shch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),

    // Cyrillic, uppercase.
    ('А', "A"),
    ('Б', "B"),
    ('В', "V"),
    ('Г', "G"),
    ('Д', "D"),
    ('Е', "E"),
    ('Ё', "Yo"),
    ('Ж', "Zh"),
    ('З', "Z"),
    ('И', "I"),
    ('Й', "Y"),
    ('К', "K"),
    ('Л', "L"),
    ('М', "M"),
    ('Н', "N"),
    ('О', "O"),
    ('П', "P"),
    ('Р', "R"),
    ('С', "S"),
    ('Т', "T"),
    ('У', "U"),
    ('Ф', "F"),
    ('Х', "Kh"),
    ('Ц', "Ts"),
    ('Ч', "Ch"),
    ('Ш', "Sh"),
    ('Щ', "Shch"),
    ('Ъ', ""),
    ('Ы', "Y"),
    ('Ь', ""),
    ('Э', "E"),
    ('Ю', "Yu"),
    ('Я', "Ya"),

    // Greek, lowercase. Modern pronunciation: eta is "i", upsilon is "y".
    ('α', "a"),
    ('β', "b"),
    ('γ', "g"),
    ('δ', "d"),
    ('ε', "e"),
    ('ζ', "z"),
    ('η', "i"),
    ('θ', "th"),
    ('ι', "i"),
    ('κ', "k"),
    ('λ', "l"),
    ('μ', "m"),
    ('ν', "n"),
    ('ξ', "x"),
    ('ο', "o"),
    ('π', "p"),
    ('ρ', "r"),
    ('σ', "s"),
    ('ς', "s"),
    ('τ', "t"),
    ('υ', "y"),
    ('φ', "f"),
    ('χ', "ch"),
    ('ψ', "ps"),
    ('ω', "o"),
    ('ϑ', "th"),
    ('ϒ', "Y"),
    ('ϖ', "p"),

    // Greek, uppercase.
    ('Α', "A"),
    ('Β', "B"),
    ('Γ', "G"),
    ('Δ', "D"),
    ('Ε', "E"),
    ('Ζ', "Z"),
    ('Η', "I"),
    ('Θ', "Th"),
    ('Ι', "I"),
    ('Κ', "K"),
    ('Λ', "L"),
    ('Μ', "M"),
    ('Ν', "N"),
    ('Ξ', "X"),
    ('Ο', "O"),
    ('Π', "P"),
    ('Ρ', "R"),
    ('Σ', "S"),
    ('Τ', "T"),
    ('Υ', "Y"),
    ('Φ', "F"),
    ('Χ', "Ch"),
    ('Ψ', "Ps"),
    ('Ω', "O"),

    // Arabic-Indic digits.
    ('٠', "0"),
    ('١', "1"),
    ('٢', "2"),
    ('٣', "3"),
    ('٤', "4"),
    ('٥', "5"),
    ('٦', "6"),
    ('٧', "7"),
    ('٨', "8"),
    ('٩', "9"),

    // Eastern Arabic-Indic (Persian) digits.
    ('۰', "0"),
    ('۱', "1"),
    ('۲', "2"),
    ('۳', "3"),
    ('۴', "4"),
    ('۵', "5"),
    ('۶', "6"),
    ('۷', "7"),
    ('۸', "8"),
    ('۹', "9"),

    // Currency.
    ('€', "EUR"),
    ('£', "GBP"),
    ('¥', "JPY"),
    ('₹', "INR"),
    ('₽', "RUB"),
    ('¢', "cent"),

    // Mathematical operators and relations.
    ('×', "x"),
    ('÷', "/"),
    ('±', "+/-"),
    ('≠', "!="),
    ('≤', "<="),
    ('≥', ">="),
    ('∞', "[infinity]"),
    ('√', "[sqrt]"),
    ('∑', "[sum]"),
    ('∫', "[integral]"),
    ('∆', "[delta]"),
    ('∇', "[nabla]"),
    ('∼', "~"),
    ('≈', "~~"),
    ('≡', "==="),
    ('∝', "[proportional to]"),
    ('∴', "[therefore]"),
    ('∵', "[because]"),
    ('∂', "[partial]"),
    ('∀', "[for all]"),
    ('∃', "[there exists]"),
    ('∅', "[empty set]"),
    ('∈', "[in]"),
    ('∉', "[not in]"),

    // Fullwidth punctuation.
    ('！', "!"),
    ('？', "?"),
    ('（', "("),
    ('）', ")"),
    ('［', "["),
    ('］', "]"),
    ('｛', "{"),
    ('｝', "}"),
    ('〈', "<"),
    ('〉', ">"),
    ('．', "."),
    ('，', ","),
    ('；', ";"),
    ('：', ":"),
    ('／', "/"),
    ('＼', "\\"),
    ('＋', "+"),
    ('－', "-"),
    ('＝', "="),
    ('＊', "*"),
    ('＆', "&"),
    ('＃', "#"),
    ('％', "%"),
    ('＠', "@"),
    ('｜', "|"),

    // Marks and other punctuation.
    ('©', "(c)"),
    ('®', "(r)"),
    ('™', "(tm)"),
    ('¡', "!"),
    ('¿', "?"),
    ('«', "\""),
    ('»', "\""),
    ('¶', "P"),
    ('§', "Section"),
    ('‾', "-"),
    ('¤', "[]"),

    // Arrows.
    ('←', "<-"),
    ('→', "->"),
    ('↑', "^"),
    ('↓', "v"),
    ('↔', "<->"),
    ('⇐', "<="),
    ('⇒', "=>"),
    ('⇑', "^^"),
    ('⇓', "vv"),
    ('↩', "<-"),
    ('↪', "->"),

    // Quotation marks.
    ('“', "\""),
    ('”', "\""),
    ('‘', "'"),
    ('’', "'"),
    ('„', "\""),
    ('‚', "'"), // single low-9 quotation mark
    ('〝', "\""), // reversed double prime quotation mark
    ('〞', "\""), // double prime quotation mark
    ('‹', "<"), // single left-pointing angle quotation mark
    ('›', ">"), // single right-pointing angle quotation mark

    // Dashes and hyphens.
    ('–', "-"), // en dash
    ('—', "--"), // em dash
    ('―', "--"), // horizontal bar
    ('‐', "-"), // hyphen
    ('‑', "-"), // non-breaking hyphen
    ('‒', "-"), // figure dash
    ('⁃', "-"), // hyphen bullet
    ('⁻', "-"), // superscript minus
    ('₋', "-"), // subscript minus
    ('\u{00AD}', ""), // soft hyphen

    // Bullets and ellipses.
    ('·', "."),
    ('•', "*"),
    ('‣', ">"),
    ('…', "..."),
    ('⋯', "..."),
    ('⋮', "..."),
    ('⋰', "..."),
    ('⋱', "..."),

    // Spaces and invisible joiners.
    ('\u{00A0}', " "), // no-break space
    ('\u{2007}', " "), // figure space
    ('\u{202F}', " "), // narrow no-break space
    ('\u{2060}', ""), // word joiner
    ('\u{200B}', ""), // zero width space
    ('\u{200C}', ""), // zero width non-joiner
    ('\u{200D}', ""), // zero width joiner
    ('\u{FEFF}', ""), // zero width no-break space

    // Vulgar fractions.
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),

    // Miscellaneous signs.
    ('°', "degrees"),
    ('µ', "micro"),
    ('¬', "not"),
    ('¦', "|"),
    ('ª', "a"),
    ('º', "o"),
];

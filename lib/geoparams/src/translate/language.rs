//! Languages known to the translation service.

use crate::WireName;

/// A language, identified on the wire by its translation service code.
///
/// ```
/// use geoparams::WireName;
/// use geoparams::translate::Language;
///
/// assert_eq!(Language::Afrikaans.code(), "af");
/// assert_eq!(Language::from_wire_name("zh-TW"), Some(Language::ChineseTraditional));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireName)]
pub enum Language {
    /// Afrikaans.
    #[wire(rename = "af")]
    Afrikaans,
    /// Albanian.
    #[wire(rename = "sq")]
    Albanian,
    /// Amharic.
    #[wire(rename = "am")]
    Amharic,
    /// Arabic.
    #[wire(rename = "ar")]
    Arabic,
    /// Armenian.
    #[wire(rename = "hy")]
    Armenian,
    /// Azerbaijani.
    #[wire(rename = "az")]
    Azerbaijani,
    /// Basque.
    #[wire(rename = "eu")]
    Basque,
    /// Belarusian.
    #[wire(rename = "be")]
    Belarusian,
    /// Bengali.
    #[wire(rename = "bn")]
    Bengali,
    /// Bosnian.
    #[wire(rename = "bs")]
    Bosnian,
    /// Bulgarian.
    #[wire(rename = "bg")]
    Bulgarian,
    /// Catalan.
    #[wire(rename = "ca")]
    Catalan,
    /// Cebuano.
    #[wire(rename = "ceb")]
    Cebuano,
    /// Chichewa.
    #[wire(rename = "ny")]
    Chichewa,
    /// Chinese Simplified.
    #[wire(rename = "zh-CN")]
    ChineseSimplified,
    /// Chinese Traditional.
    #[wire(rename = "zh-TW")]
    ChineseTraditional,
    /// Corsican.
    #[wire(rename = "co")]
    Corsican,
    /// Croatian.
    #[wire(rename = "hr")]
    Croatian,
    /// Czech.
    #[wire(rename = "cs")]
    Czech,
    /// Danish.
    #[wire(rename = "da")]
    Danish,
    /// Dutch.
    #[wire(rename = "nl")]
    Dutch,
    /// English.
    #[wire(rename = "en")]
    English,
    /// Esperanto.
    #[wire(rename = "eo")]
    Esperanto,
    /// Estonian.
    #[wire(rename = "et")]
    Estonian,
    /// Filipino.
    #[wire(rename = "tl")]
    Filipino,
    /// Finnish.
    #[wire(rename = "fi")]
    Finnish,
    /// French.
    #[wire(rename = "fr")]
    French,
    /// Frisian.
    #[wire(rename = "fy")]
    Frisian,
    /// Galician.
    #[wire(rename = "gl")]
    Galician,
    /// Georgian.
    #[wire(rename = "ka")]
    Georgian,
    /// German.
    #[wire(rename = "de")]
    German,
    /// Greek.
    #[wire(rename = "el")]
    Greek,
    /// Gujarati.
    #[wire(rename = "gu")]
    Gujarati,
    /// Haitian Creole.
    #[wire(rename = "ht")]
    HaitianCreole,
    /// Hausa.
    #[wire(rename = "ha")]
    Hausa,
    /// Hawaiian.
    #[wire(rename = "haw")]
    Hawaiian,
    /// Hebrew.
    #[wire(rename = "iw")]
    Hebrew,
    /// Hindi.
    #[wire(rename = "hi")]
    Hindi,
    /// Hmong.
    #[wire(rename = "hmn")]
    Hmong,
    /// Hungarian.
    #[wire(rename = "hu")]
    Hungarian,
    /// Icelandic.
    #[wire(rename = "is")]
    Icelandic,
    /// Igbo.
    #[wire(rename = "ig")]
    Igbo,
    /// Indonesian.
    #[wire(rename = "id")]
    Indonesian,
    /// Irish.
    #[wire(rename = "ga")]
    Irish,
    /// Italian.
    #[wire(rename = "it")]
    Italian,
    /// Japanese.
    #[wire(rename = "ja")]
    Japanese,
    /// Javanese.
    #[wire(rename = "jw")]
    Javanese,
    /// Kannada.
    #[wire(rename = "kn")]
    Kannada,
    /// Kazakh.
    #[wire(rename = "kk")]
    Kazakh,
    /// Khmer.
    #[wire(rename = "km")]
    Khmer,
    /// Korean.
    #[wire(rename = "ko")]
    Korean,
    /// Kurdish.
    #[wire(rename = "ku")]
    Kurdish,
    /// Kyrgyz.
    #[wire(rename = "ky")]
    Kyrgyz,
    /// Lao.
    #[wire(rename = "lo")]
    Lao,
    /// Latin.
    #[wire(rename = "la")]
    Latin,
    /// Latvian.
    #[wire(rename = "lv")]
    Latvian,
    /// Lithuanian.
    #[wire(rename = "lt")]
    Lithuanian,
    /// Luxembourgish.
    #[wire(rename = "lb")]
    Luxembourgish,
    /// Macedonian.
    #[wire(rename = "mk")]
    Macedonian,
    /// Malagasy.
    #[wire(rename = "mg")]
    Malagasy,
    /// Malay.
    #[wire(rename = "ms")]
    Malay,
    /// Malayalam.
    #[wire(rename = "ml")]
    Malayalam,
    /// Maltese.
    #[wire(rename = "mt")]
    Maltese,
    /// Maori.
    #[wire(rename = "mi")]
    Maori,
    /// Marathi.
    #[wire(rename = "mr")]
    Marathi,
    /// Mongolian.
    #[wire(rename = "mn")]
    Mongolian,
    /// Myanmar.
    #[wire(rename = "my")]
    Myanmar,
    /// Nepali.
    #[wire(rename = "ne")]
    Nepali,
    /// Norwegian.
    #[wire(rename = "no")]
    Norwegian,
    /// Pashto.
    #[wire(rename = "ps")]
    Pashto,
    /// Persian.
    #[wire(rename = "fa")]
    Persian,
    /// Polish.
    #[wire(rename = "pl")]
    Polish,
    /// Portuguese.
    #[wire(rename = "pt")]
    Portuguese,
    /// Punjabi.
    #[wire(rename = "pa")]
    Punjabi,
    /// Romanian.
    #[wire(rename = "ro")]
    Romanian,
    /// Russian.
    #[wire(rename = "ru")]
    Russian,
    /// Samoan.
    #[wire(rename = "sm")]
    Samoan,
    /// Scots Gaelic.
    #[wire(rename = "gd")]
    ScotsGaelic,
    /// Serbian.
    #[wire(rename = "sr")]
    Serbian,
    /// Sesotho.
    #[wire(rename = "st")]
    Sesotho,
    /// Shona.
    #[wire(rename = "sn")]
    Shona,
    /// Sindhi.
    #[wire(rename = "sd")]
    Sindhi,
    /// Sinhala.
    #[wire(rename = "si")]
    Sinhala,
    /// Slovak.
    #[wire(rename = "sk")]
    Slovak,
    /// Slovenian.
    #[wire(rename = "sl")]
    Slovenian,
    /// Somali.
    #[wire(rename = "so")]
    Somali,
    /// Spanish.
    #[wire(rename = "es")]
    Spanish,
    /// Sundanese.
    #[wire(rename = "su")]
    Sundanese,
    /// Swahili.
    #[wire(rename = "sw")]
    Swahili,
    /// Swedish.
    #[wire(rename = "sv")]
    Swedish,
    /// Tajik.
    #[wire(rename = "tg")]
    Tajik,
    /// Tamil.
    #[wire(rename = "ta")]
    Tamil,
    /// Telugu.
    #[wire(rename = "te")]
    Telugu,
    /// Thai.
    #[wire(rename = "th")]
    Thai,
    /// Turkish.
    #[wire(rename = "tr")]
    Turkish,
    /// Ukrainian.
    #[wire(rename = "uk")]
    Ukrainian,
    /// Urdu.
    #[wire(rename = "ur")]
    Urdu,
    /// Uzbek.
    #[wire(rename = "uz")]
    Uzbek,
    /// Vietnamese.
    #[wire(rename = "vi")]
    Vietnamese,
    /// Welsh.
    #[wire(rename = "cy")]
    Welsh,
    /// Xhosa.
    #[wire(rename = "xh")]
    Xhosa,
    /// Yiddish.
    #[wire(rename = "yi")]
    Yiddish,
    /// Yoruba.
    #[wire(rename = "yo")]
    Yoruba,
    /// Zulu.
    #[wire(rename = "zu")]
    Zulu,
}

impl Language {
    /// The language code, same as the wire name.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.wire_name()
    }
}

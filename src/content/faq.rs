//! FAQ content for the profile section

use crate::locale::Locale;

/// One question/answer pair
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

const FAQ_EN: &[FaqEntry] = &[
    FaqEntry {
        question: "Is AgriSense free to use?",
        answer: "Yes. All guides and features are free, with no account required.",
    },
    FaqEntry {
        question: "Does the app work without an internet connection?",
        answer: "Yes. Every guide is stored on your device, so you can read and \
                 complete steps anywhere, including in the field.",
    },
    FaqEntry {
        question: "How do I change the language?",
        answer: "Press 'l' on any screen to switch between English and Tagalog. \
                 Your progress in a guide is kept when you switch.",
    },
    FaqEntry {
        question: "Is my guide progress saved?",
        answer: "Progress lasts for the current session only. Leaving a guide or \
                 closing the app starts it fresh, so you can rerun a guide anytime.",
    },
    FaqEntry {
        question: "Are the guides written for my region?",
        answer: "The guides cover general practices for tropical smallholder farms. \
                 For local varieties and pest seasons, consult your municipal \
                 agriculture office.",
    },
];

const FAQ_TL: &[FaqEntry] = &[
    FaqEntry {
        question: "Libre ba ang paggamit ng AgriSense?",
        answer: "Opo. Lahat ng gabay at tampok ay libre, at hindi kailangan ng \
                 account.",
    },
    FaqEntry {
        question: "Gumagana ba ang app kahit walang internet?",
        answer: "Opo. Nakatago sa inyong device ang bawat gabay, kaya maaari \
                 kayong magbasa at tumapos ng mga hakbang kahit saan, pati sa bukid.",
    },
    FaqEntry {
        question: "Paano ko papalitan ang wika?",
        answer: "Pindutin ang 'l' sa alinmang screen upang magpalit sa pagitan ng \
                 Ingles at Tagalog. Mananatili ang inyong progreso sa gabay kapag \
                 nagpalit kayo.",
    },
    FaqEntry {
        question: "Naitatabi ba ang aking progreso sa gabay?",
        answer: "Tumatagal lamang ang progreso sa kasalukuyang sesyon. Kapag \
                 umalis sa gabay o isinara ang app, magsisimula itong muli, kaya \
                 maaaring ulitin ang gabay anumang oras.",
    },
    FaqEntry {
        question: "Akma ba ang mga gabay sa aming rehiyon?",
        answer: "Saklaw ng mga gabay ang pangkalahatang kaugalian para sa maliliit \
                 na sakahan sa tropiko. Para sa mga lokal na uri at panahon ng peste, \
                 sumangguni sa inyong munisipal na tanggapan ng agrikultura.",
    },
];

/// FAQ entries for a locale
pub fn entries(locale: Locale) -> &'static [FaqEntry] {
    match locale {
        Locale::En => FAQ_EN,
        Locale::Tl => FAQ_TL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::SUPPORTED_LOCALES;

    #[test]
    fn test_faq_parity_across_locales() {
        assert_eq!(FAQ_EN.len(), FAQ_TL.len());
        for &locale in SUPPORTED_LOCALES {
            for entry in entries(locale) {
                assert!(!entry.question.is_empty());
                assert!(!entry.answer.is_empty());
            }
        }
    }
}

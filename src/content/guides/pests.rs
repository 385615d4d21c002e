//! Pest management guide content

use crate::content::model::{GuideId, RawGuide, RawLocaleTable};

pub static GUIDE: RawGuide = RawGuide {
    id: GuideId::PestManagement,
    en: RawLocaleTable {
        title: "Pest Management",
        steps: &[
            ("Scout your field weekly", "pest.scout"),
            ("Identify before you act", "pest.identify"),
            ("Start with cultural controls", "pest.cultural"),
            ("Protect the natural enemies", "pest.allies"),
            ("Spray only as a last resort", "pest.spray"),
        ],
        content: &[
            (
                "pest.scout",
                "Walk your field at least once a week, checking the undersides of leaves, \
                 stems, and the soil line. Look for chewed edges, sticky residue, \
                 discoloration, and the insects themselves. Early detection keeps a few \
                 pests from becoming an outbreak.",
            ),
            (
                "pest.identify",
                "Not every insect is a pest, and different pests need different \
                 responses. Collect a sample or take a clear photo and compare it against \
                 a local pest guide, or ask your agricultural extension officer before \
                 choosing any treatment.",
            ),
            (
                "pest.cultural",
                "Healthy fields resist pests. Rotate crops, remove crop residue and \
                 volunteer plants that shelter insects, plant resistant varieties when \
                 available, and time planting to avoid peak pest seasons in your area.",
            ),
            (
                "pest.allies",
                "Spiders, lady beetles, parasitic wasps, and birds eat the pests for \
                 free. Keep flowering strips or hedges at field edges to shelter them, \
                 and avoid broad-spectrum insecticides that kill your allies along with \
                 the pests.",
            ),
            (
                "pest.spray",
                "If pest numbers pass the damaging threshold, choose the most selective \
                 product available, follow the label dose exactly, and spray in calm \
                 weather early in the morning or late afternoon. Keep records of what was \
                 applied, where, and when.",
            ),
        ],
    },
    tl: RawLocaleTable {
        title: "Pamamahala ng Peste",
        steps: &[
            ("Suriin ang bukid linggo-linggo", "pest.scout"),
            ("Kilalanin bago kumilos", "pest.identify"),
            ("Simulan sa tamang pagsasaka", "pest.cultural"),
            ("Ingatan ang mga likas na kaaway ng peste", "pest.allies"),
            ("Mag-spray lamang bilang huling paraan", "pest.spray"),
        ],
        content: &[
            (
                "pest.scout",
                "Libutin ang iyong bukid kahit minsan sa isang linggo at tingnan ang \
                 ilalim ng mga dahon, tangkay, at ang lupa sa paligid ng halaman. \
                 Hanapin ang nginatngat na gilid, malagkit na bakas, pagbabago ng kulay, \
                 at ang mismong mga insekto. Ang maagang pagtuklas ay pumipigil sa \
                 pagdami ng peste.",
            ),
            (
                "pest.identify",
                "Hindi lahat ng insekto ay peste, at magkaiba ang tugon sa bawat uri. \
                 Kumuha ng sample o malinaw na litrato at ihambing ito sa lokal na gabay \
                 sa peste, o magtanong sa inyong agricultural extension officer bago \
                 pumili ng anumang lunas.",
            ),
            (
                "pest.cultural",
                "Ang malusog na bukid ay lumalaban sa peste. Mag-ikot ng pananim, \
                 alisin ang mga labi ng ani at ligaw na halamang pinagtataguan ng \
                 insekto, magtanim ng matitibay na uri kung mayroon, at iayon ang \
                 pagtatanim upang maiwasan ang kasagsagan ng peste sa inyong lugar.",
            ),
            (
                "pest.allies",
                "Ang mga gagamba, lady beetle, parasitic wasp, at ibon ay kumakain ng \
                 peste nang libre. Maglaan ng mga namumulaklak na halaman o bakod na \
                 buhay sa gilid ng bukid upang may silungan sila, at iwasan ang mga \
                 pestisidyong pumapatay maging sa mga kakamping ito.",
            ),
            (
                "pest.spray",
                "Kapag lumampas na sa mapanganib na bilang ang peste, piliin ang \
                 pinakapiling produkto, sundin nang eksakto ang dosis sa etiketa, at \
                 mag-spray sa payapang panahon tuwing madaling-araw o hapon. Itala kung \
                 ano ang ginamit, saan, at kailan.",
            ),
        ],
    },
};

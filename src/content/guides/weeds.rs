//! Weed control guide content

use crate::content::model::{GuideId, RawGuide, RawLocaleTable};

pub static GUIDE: RawGuide = RawGuide {
    id: GuideId::WeedControl,
    en: RawLocaleTable {
        title: "Weed Control",
        steps: &[
            ("Know your common weeds", "weed.identify"),
            ("Strike early and small", "weed.early"),
            ("Smother with mulch and cover", "weed.smother"),
            ("Close the canopy fast", "weed.canopy"),
            ("Never let weeds set seed", "weed.seed"),
        ],
        content: &[
            (
                "weed.identify",
                "Learn the five or six weeds that dominate your field and whether they \
                 spread by seed, runners, or underground stems. Grasses, sedges, and \
                 broadleaf weeds each call for different tactics, and a few aggressive \
                 species cause most of the losses.",
            ),
            (
                "weed.early",
                "A weed pulled at two weeks costs seconds; at two months it costs yield. \
                 Cultivate or hand-weed while weeds are seedlings, especially in the \
                 first third of the crop's life when competition for light and nitrogen \
                 hurts most.",
            ),
            (
                "weed.smother",
                "Bare soil is an invitation. Mulch between rows with straw or dry \
                 grass, or grow a low cover crop that shades the ground. Most weed \
                 seeds need light to germinate, and a covered soil surface stops them \
                 before they start.",
            ),
            (
                "weed.canopy",
                "Healthy, evenly spaced crops are their own herbicide. Use the \
                 recommended plant spacing, replant gaps early, and feed and water so \
                 the crop canopy closes over the rows quickly and shades weeds out.",
            ),
            (
                "weed.seed",
                "One pigweed plant can drop over one hundred thousand seeds that wait \
                 in the soil for years. Before weeds flower, cut, pull, or plow them \
                 in, even at field edges and along paths. Stopping seed set this season \
                 is next season's weed control.",
            ),
        ],
    },
    tl: RawLocaleTable {
        title: "Pagsugpo sa Damo",
        steps: &[
            ("Kilalanin ang mga karaniwang damo", "weed.identify"),
            ("Sugpuin habang maliliit pa", "weed.early"),
            ("Takpan gamit ang mulch at pantakip na pananim", "weed.smother"),
            ("Mabilis na palaguin ang lilim ng pananim", "weed.canopy"),
            ("Huwag hayaang magbinhi ang damo", "weed.seed"),
        ],
        content: &[
            (
                "weed.identify",
                "Alamin ang lima o anim na damong nangingibabaw sa iyong bukid at kung \
                 kumakalat ito sa binhi, baging, o ugat sa ilalim ng lupa. Magkaiba ang \
                 paraan ng pagsugpo sa mga damong parang palay, sa mutha, at sa mga \
                 malapad ang dahon, at iilang mapanirang uri ang sanhi ng karamihan ng \
                 pagkalugi.",
            ),
            (
                "weed.early",
                "Ang damong binunot sa ikalawang linggo ay ilang segundo lamang; sa \
                 ikalawang buwan, ani na ang kapalit. Mag-araro o magbunot habang \
                 punla pa lamang ang damo, lalo na sa unang bahagi ng buhay ng pananim \
                 kung kailan pinakamasakit ang agawan sa liwanag at sustansya.",
            ),
            (
                "weed.smother",
                "Ang hubad na lupa ay paanyaya sa damo. Lagyan ng dayami o tuyong damo \
                 ang pagitan ng mga hanay, o magtanim ng mababang pantakip na pananim \
                 na lumililim sa lupa. Karamihan ng binhi ng damo ay nangangailangan ng \
                 liwanag upang tumubo, kaya napipigilan sila ng natatakpang lupa.",
            ),
            (
                "weed.canopy",
                "Ang malusog at pantay-pantay na pananim ay likas na pamatay-damo. \
                 Sundin ang tamang agwat ng pagtatanim, agad palitan ang mga patay na \
                 punla, at pakainin at diligin ang pananim upang mabilis magsara ang \
                 lilim nito sa mga hanay at madiliman ang damo.",
            ),
            (
                "weed.seed",
                "Ang isang puno ng kulitis ay maaaring maghulog ng mahigit isandaang \
                 libong binhi na maghihintay sa lupa nang maraming taon. Bago mamulaklak \
                 ang damo, gapasin, bunutin, o ibaon ito sa araro, pati sa gilid ng \
                 bukid at mga daanan. Ang pagpigil sa pagbibinhi ngayong taniman ang \
                 pagsugpo sa damo sa susunod.",
            ),
        ],
    },
};

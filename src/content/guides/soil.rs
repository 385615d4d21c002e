//! Soil moisture guide content

use crate::content::model::{GuideId, RawGuide, RawLocaleTable};

pub static GUIDE: RawGuide = RawGuide {
    id: GuideId::SoilMoisture,
    en: RawLocaleTable {
        title: "Soil Moisture",
        steps: &[
            ("Learn the feel test", "soil.feel"),
            ("Check moisture at root depth", "soil.depth"),
            ("Mulch to hold water in", "soil.mulch"),
            ("Water deeply, not daily", "soil.water"),
            ("Fix drainage problems early", "soil.drainage"),
        ],
        content: &[
            (
                "soil.feel",
                "Squeeze a handful of soil from the root zone. If it forms a ball that \
                 holds together and leaves your palm slightly damp, moisture is adequate. \
                 If it crumbles to dust, it is time to water; if water drips out, the \
                 field is saturated.",
            ),
            (
                "soil.depth",
                "Surface soil dries first and can mislead you. Dig or probe down to \
                 where the roots actually feed, fifteen to thirty centimeters for most \
                 vegetables, and judge moisture there. A straight stick left in the soil \
                 for an hour makes a simple probe.",
            ),
            (
                "soil.mulch",
                "Cover the soil around your plants with rice straw, dry grass, or other \
                 organic mulch. Mulch shades the soil, cuts evaporation sharply, keeps \
                 roots cooler, and feeds soil life as it breaks down.",
            ),
            (
                "soil.water",
                "Frequent shallow watering grows shallow roots that suffer in dry spells. \
                 Water less often but deeply, so moisture reaches below the root zone and \
                 roots follow it down. Early morning watering loses the least to \
                 evaporation.",
            ),
            (
                "soil.drainage",
                "Standing water suffocates roots within days. Where water ponds after \
                 rain, dig shallow drainage channels, raise beds, or mix in organic \
                 matter to open heavy soil. Check the field after every strong rain.",
            ),
        ],
    },
    tl: RawLocaleTable {
        title: "Halumigmig ng Lupa",
        steps: &[
            ("Alamin ang pagsubok gamit ang kamay", "soil.feel"),
            ("Suriin ang halumigmig sa lalim ng ugat", "soil.depth"),
            ("Mag-mulch upang hindi matuyo ang lupa", "soil.mulch"),
            ("Magdilig nang malalim, hindi araw-araw", "soil.water"),
            ("Agad ayusin ang problema sa daluyan ng tubig", "soil.drainage"),
        ],
        content: &[
            (
                "soil.feel",
                "Pisilin ang isang dakot ng lupa mula sa bahagi ng ugat. Kung \
                 nabubuo itong bola at bahagyang basa ang iyong palad, sapat ang \
                 halumigmig. Kung gumuguho ito na parang alikabok, panahon na para \
                 magdilig; kung may tumutulong tubig, sobrang basa na ang bukid.",
            ),
            (
                "soil.depth",
                "Unang natutuyo ang ibabaw ng lupa kaya maaari itong makapanlinlang. \
                 Maghukay o magbaon hanggang sa kinakainan ng mga ugat, labinlima \
                 hanggang tatlumpung sentimetro para sa karamihan ng gulay, at doon \
                 hatulan ang halumigmig. Ang tuwid na patpat na ibinaon nang isang oras \
                 ay simpleng panukat.",
            ),
            (
                "soil.mulch",
                "Takpan ang lupa sa paligid ng mga halaman ng dayami, tuyong damo, o \
                 iba pang organikong mulch. Nililiman ng mulch ang lupa, malaki ang \
                 naibabawas nito sa pagsingaw ng tubig, pinapalamig ang mga ugat, at \
                 nagpapataba sa lupa habang nabubulok.",
            ),
            (
                "soil.water",
                "Ang madalas ngunit mababaw na pagdidilig ay nagpapalago ng mababaw na \
                 ugat na nahihirapan sa tagtuyot. Magdilig nang mas madalang ngunit \
                 malalim upang umabot ang tubig sa ilalim ng mga ugat at sundan ito ng \
                 mga ugat pababa. Pinakakaunti ang nasasayang kapag nagdidilig sa \
                 madaling-araw.",
            ),
            (
                "soil.drainage",
                "Ilang araw lamang ay nalulunod na ang mga ugat sa nakatayong tubig. \
                 Kung saan pumupondo ang tubig pagkatapos ng ulan, gumawa ng mababaw na \
                 kanal, itaas ang taniman, o haluan ng organikong materyal ang mabigat \
                 na lupa. Suriin ang bukid pagkatapos ng bawat malakas na ulan.",
            ),
        ],
    },
};

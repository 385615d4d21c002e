//! Fertilizer use guide content

use crate::content::model::{GuideId, RawGuide, RawLocaleTable};

pub static GUIDE: RawGuide = RawGuide {
    id: GuideId::FertilizerUse,
    en: RawLocaleTable {
        title: "Fertilizer Use",
        steps: &[
            ("Start from a soil test", "fert.test"),
            ("Match the fertilizer to the need", "fert.match"),
            ("Split the applications", "fert.split"),
            ("Place it where roots can reach", "fert.place"),
            ("Record and adjust next season", "fert.record"),
        ],
        content: &[
            (
                "fert.test",
                "Guessing wastes money and can burn your crop. Have your soil tested \
                 through the local agriculture office, or at minimum read the field: \
                 pale leaves, purple stems, and scorched leaf edges each point to a \
                 different missing nutrient.",
            ),
            (
                "fert.match",
                "Nitrogen drives leaf growth, phosphorus drives roots and flowering, \
                 potassium drives fruit filling and disease resistance. Pick a grade \
                 that supplies what your soil test says is short, and use compost or \
                 manure to build long-term fertility alongside.",
            ),
            (
                "fert.split",
                "Crops cannot absorb a whole season's nutrition in one day. Apply a \
                 basal dose at planting, then side-dress the remainder in one or two \
                 later passes at the crop's hungry stages. Splitting cuts losses to \
                 rain and keeps feeding steady.",
            ),
            (
                "fert.place",
                "Fertilizer on the soil surface feeds the air and the weeds. Band it a \
                 few centimeters beside and below the seed row, or work it into moist \
                 soil near the drip line of the plant, then water it in so roots can \
                 take it up.",
            ),
            (
                "fert.record",
                "Write down what you applied, how much, when, and what the crop did. \
                 After harvest, compare fields and seasons. Records turn fertilizer \
                 from a recurring expense into a plan that sharpens every year.",
            ),
        ],
    },
    tl: RawLocaleTable {
        title: "Paggamit ng Pataba",
        steps: &[
            ("Magsimula sa pagsusuri ng lupa", "fert.test"),
            ("Itugma ang pataba sa pangangailangan", "fert.match"),
            ("Hatiin ang paglalagay ng pataba", "fert.split"),
            ("Ilagay kung saan aabot ang mga ugat", "fert.place"),
            ("Itala at iakma sa susunod na taniman", "fert.record"),
        ],
        content: &[
            (
                "fert.test",
                "Ang panghuhula ay nagsasayang ng pera at maaaring makasunog ng \
                 pananim. Ipasuri ang lupa sa lokal na tanggapan ng agrikultura, o \
                 basahin man lang ang bukid: ang maputlang dahon, lilang tangkay, at \
                 tuyong gilid ng dahon ay tumuturo sa magkakaibang kulang na sustansya.",
            ),
            (
                "fert.match",
                "Ang nitrogen ay para sa paglago ng dahon, ang phosphorus ay para sa \
                 ugat at pamumulaklak, at ang potassium ay para sa paglaki ng bunga at \
                 panlaban sa sakit. Pumili ng grado ng pataba na magpupuno sa kulang \
                 ayon sa pagsusuri, at gumamit ng kompost o dumi ng hayop para sa \
                 pangmatagalang taba ng lupa.",
            ),
            (
                "fert.split",
                "Hindi kayang sipsipin ng pananim ang buong taniman na sustansya sa \
                 isang araw. Maglagay ng panimulang dosis sa pagtatanim, pagkatapos ay \
                 idagdag ang natitira sa isa o dalawang pagkakataon tuwing gutom na \
                 yugto ng pananim. Ang paghahati ay nagbabawas ng nasasayang sa ulan \
                 at nagpapanatili ng tuloy-tuloy na pagpapakain.",
            ),
            (
                "fert.place",
                "Ang patabang nasa ibabaw lamang ng lupa ay nagpapakain sa hangin at \
                 sa damo. Ibaon ito nang ilang sentimetro sa tabi at ilalim ng hanay \
                 ng binhi, o ihalo sa mamasa-masang lupa malapit sa dulo ng lilim ng \
                 halaman, saka diligan upang masipsip ng mga ugat.",
            ),
            (
                "fert.record",
                "Isulat kung ano ang inilagay, gaano karami, kailan, at ano ang naging \
                 tugon ng pananim. Pagkatapos ng ani, paghambingin ang mga bukid at \
                 taniman. Ginagawa ng talaan ang pataba mula sa paulit-ulit na gastos \
                 tungo sa planong tumatalas bawat taon.",
            ),
        ],
    },
};

//! Harvest timing guide content

use crate::content::model::{GuideId, RawGuide, RawLocaleTable};

pub static GUIDE: RawGuide = RawGuide {
    id: GuideId::HarvestTiming,
    en: RawLocaleTable {
        title: "Harvest Timing",
        steps: &[
            ("Know the maturity signs", "harvest.maturity"),
            ("Check the weather window", "harvest.weather"),
            ("Test a small sample first", "harvest.sample"),
            ("Harvest at the right hour", "harvest.hour"),
            ("Handle and store right away", "harvest.storage"),
        ],
        content: &[
            (
                "harvest.maturity",
                "Learn the maturity indicators for your crop: grain that hardens and turns \
                 golden, fruit that reaches full color, or leaves that begin to dry at the \
                 base. Harvesting too early lowers yield and quality; too late invites \
                 shattering, pests, and rot.",
            ),
            (
                "harvest.weather",
                "Plan the harvest around a dry spell of at least two to three days. Wet \
                 crops mold quickly in storage, and muddy fields damage both the produce \
                 and the soil structure under foot and machine traffic.",
            ),
            (
                "harvest.sample",
                "Before committing to the whole field, pick a small sample from several \
                 spots and inspect it. Check grain moisture by biting a kernel or fruit \
                 firmness by gentle pressure. Uneven fields may need to be harvested in \
                 sections.",
            ),
            (
                "harvest.hour",
                "Harvest leafy vegetables and fruit in the cool of early morning, after \
                 the dew has dried but before the midday heat. Grain is best cut once the \
                 sun has burned off surface moisture. Heat-stressed produce wilts and \
                 bruises faster.",
            ),
            (
                "harvest.storage",
                "Move harvested produce into shade immediately and sort out damaged \
                 pieces. Dry grain to a safe moisture level before bagging, and keep \
                 storage areas clean, dry, and off the ground to protect your work from \
                 pests and spoilage.",
            ),
        ],
    },
    tl: RawLocaleTable {
        title: "Tamang Panahon ng Pag-ani",
        steps: &[
            ("Alamin ang senyales ng paghinog", "harvest.maturity"),
            ("Tingnan ang lagay ng panahon", "harvest.weather"),
            ("Subukan muna ang maliit na sample", "harvest.sample"),
            ("Mag-ani sa tamang oras ng araw", "harvest.hour"),
            ("Agad na ayusin at itago", "harvest.storage"),
        ],
        content: &[
            (
                "harvest.maturity",
                "Alamin ang mga palatandaan ng hinog na pananim: butil na tumitigas at \
                 nagiging ginintuan, bungang umabot na sa buong kulay, o mga dahong \
                 natutuyo na sa puno. Ang maagang pag-ani ay nagpapababa ng ani at \
                 kalidad; ang huli namang pag-ani ay nagdudulot ng paglalagas, peste, at \
                 pagkabulok.",
            ),
            (
                "harvest.weather",
                "Iplano ang pag-ani sa panahong tuyot nang dalawa hanggang tatlong araw. \
                 Mabilis inaamag ang basang ani sa imbakan, at ang maputik na bukid ay \
                 nakasisira sa ani at sa lupa dahil sa pagtapak at paggamit ng makina.",
            ),
            (
                "harvest.sample",
                "Bago anihin ang buong bukid, kumuha muna ng maliit na sample mula sa \
                 iba't ibang bahagi at suriin ito. Subukan ang halumigmig ng butil sa \
                 pamamagitan ng pagkagat, o ang tigas ng bunga sa marahang pagpisil. Ang \
                 hindi pantay na bukid ay maaaring anihin nang paisa-isang bahagi.",
            ),
            (
                "harvest.hour",
                "Anihin ang mga gulay na madahon at prutas sa malamig na umaga, kapag \
                 natuyo na ang hamog ngunit bago ang tanghaling tapat. Ang butil ay \
                 pinakamainam gapasin kapag natuyo na ng araw ang ibabaw nito. Mabilis \
                 malanta at magasgas ang aning nainitan.",
            ),
            (
                "harvest.storage",
                "Agad na ilipat sa lilim ang inaning produkto at ihiwalay ang mga sira. \
                 Patuyuin ang butil hanggang sa ligtas na antas ng halumigmig bago \
                 isako, at panatilihing malinis, tuyo, at nakaangat sa lupa ang imbakan \
                 upang maprotektahan ang ani laban sa peste at pagkasira.",
            ),
        ],
    },
};

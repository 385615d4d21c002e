//! Crop rotation guide content

use crate::content::model::{GuideId, RawGuide, RawLocaleTable};

pub static GUIDE: RawGuide = RawGuide {
    id: GuideId::CropRotation,
    en: RawLocaleTable {
        title: "Crop Rotation",
        steps: &[
            ("Map your plots and history", "rot.map"),
            ("Group crops by family", "rot.family"),
            ("Plan a three-year sequence", "rot.sequence"),
            ("Put legumes to work", "rot.legumes"),
            ("Keep the rotation honest", "rot.records"),
        ],
        content: &[
            (
                "rot.map",
                "Sketch your land into numbered plots and write down what grew in each \
                 one for the past seasons. Rotation planning starts from knowing where \
                 every crop family has already been, because soil pests and diseases \
                 remember even when we forget.",
            ),
            (
                "rot.family",
                "Crops in the same family share the same enemies: tomato, eggplant, \
                 and pepper; squash and cucumber; cabbage and radish; rice and corn \
                 among the grasses. Treat each family as one unit that must not follow \
                 itself on the same plot.",
            ),
            (
                "rot.sequence",
                "Arrange families so at least two to three seasons pass before a \
                 family returns to a plot. A simple cycle alternates heavy feeders like \
                 corn, soil builders like beans, and light feeders like root crops, \
                 moving each group one plot forward every season.",
            ),
            (
                "rot.legumes",
                "Beans, peanuts, and mung beans host bacteria that pull nitrogen from \
                 the air into the soil. Slot a legume before your hungriest crop, and \
                 plow the residue back in after harvest instead of burning it, so the \
                 stored nitrogen feeds what follows.",
            ),
            (
                "rot.records",
                "Each season, record what was planted where, the yields, and any \
                 disease outbreaks. When a plot underperforms, the history tells you \
                 whether the rotation was broken. A rotation only works when it is \
                 followed year after year.",
            ),
        ],
    },
    tl: RawLocaleTable {
        title: "Pag-ikot ng Pananim",
        steps: &[
            ("Iguhit ang mga taniman at kasaysayan nito", "rot.map"),
            ("Pagpangkatin ang mga pananim ayon sa pamilya", "rot.family"),
            ("Magplano ng tatlong-taong pagkakasunod", "rot.sequence"),
            ("Gamitin ang mga legumbre", "rot.legumes"),
            ("Panatilihing tapat ang pag-ikot", "rot.records"),
        ],
        content: &[
            (
                "rot.map",
                "Iguhit ang iyong lupa sa mga may numerong taniman at isulat kung ano \
                 ang itinanim sa bawat isa nitong mga nakaraang taniman. Nagsisimula \
                 ang pagpaplano ng pag-ikot sa pag-alam kung saan na napunta ang bawat \
                 pamilya ng pananim, dahil naaalala ng peste at sakit sa lupa kahit \
                 nakalimutan na natin.",
            ),
            (
                "rot.family",
                "Magkakapareho ang kaaway ng mga pananim na magkakapamilya: kamatis, \
                 talong, at sili; kalabasa at pipino; repolyo at labanos; palay at mais \
                 sa mga damong-uri. Ituring ang bawat pamilya bilang isang pangkat na \
                 hindi dapat sumunod sa sarili sa parehong taniman.",
            ),
            (
                "rot.sequence",
                "Ayusin ang mga pamilya upang lumipas muna ang dalawa hanggang tatlong \
                 taniman bago bumalik ang isang pamilya sa isang lote. Ang simpleng \
                 ikot ay nagsasalitan ng malalakas kumain tulad ng mais, nagpapataba ng \
                 lupa tulad ng sitaw, at magaan kumain tulad ng mga halamang-ugat, na \
                 inuusog nang isang lote bawat taniman.",
            ),
            (
                "rot.legumes",
                "Ang sitaw, mani, at munggo ay may bakteryang humihigop ng nitrogen \
                 mula sa hangin papunta sa lupa. Itanim ang legumbre bago ang iyong \
                 pinakagutom na pananim, at ibaon sa araro ang mga labi pagkatapos ng \
                 ani sa halip na sunugin, upang ang naipong nitrogen ay magpakain sa \
                 susunod.",
            ),
            (
                "rot.records",
                "Bawat taniman, itala kung ano ang itinanim at saan, ang mga ani, at \
                 anumang pagsiklab ng sakit. Kapag humina ang isang lote, sasabihin ng \
                 kasaysayan kung nasira ang pag-ikot. Ang pag-ikot ng pananim ay \
                 gumagana lamang kapag sinusunod ito taon-taon.",
            ),
        ],
    },
};

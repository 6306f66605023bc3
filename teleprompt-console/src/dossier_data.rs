use teleprompt_core::dossier::{Dossier, Section};

/// Built-in demo content, in the same shape the live site embeds:
/// literal text interleaved with markup tags the engine reveals
/// atomically.
pub fn demo_dossier() -> Dossier {
    let mut dossier = Dossier::new();

    dossier.push(Section {
        slug: "studio".to_string(),
        title: "Studio Lead".to_string(),
        body: "<b>Role:</b> Studio Lead<br><b>Location:</b> Remote<br>\
               <b>Period:</b> 2023 - Present<br><br>\
               • Shipped the experience terminal and its reveal engine.<br>\
               • Cut page weight by replacing three duplicated scripts with one.<br>"
            .to_string(),
    });

    dossier.push(Section {
        slug: "agency".to_string(),
        title: "Front-End Engineer".to_string(),
        body: "<b>Role:</b> Front-End Engineer<br><b>Location:</b> New York, NY<br>\
               <b>Period:</b> 2021 - 2023<br><br>\
               • Built interactive resume viewers for client portfolios.<br>\
               • Owned the light/dark theming system end to end.<br>"
            .to_string(),
    });

    dossier.push(Section {
        slug: "lab".to_string(),
        title: "Research Intern".to_string(),
        body: "<b>Role:</b> Research Intern<br><b>Location:</b> Boston, MA<br>\
               <b>Period:</b> 2020<br><br>\
               • Prototyped a retrieval-backed Q&A agent for the site chat.<br>"
            .to_string(),
    });

    dossier
}

//! Embedded page manifest.
//!
//! The wiki's entries ship inside the binary as one JSON document parsed
//! into a [`codex_core::PageRegistry`] at startup. Section bodies are
//! Markdown; `levels` lists each page's ancestor chain in hierarchy keys.

pub const PAGE_MANIFEST: &str = r#"[
  {
    "key": "celestial-dominion",
    "title": "The Celestial Dominion",
    "levels": ["celestial-dominion"],
    "summary": "The firmament itself, first of all realms, where the Flame Eternal was kindled.",
    "gateway": true,
    "sections": [
      {
        "id": "origins",
        "title": "Origins of the Dominion",
        "body": "Before the first word was written, the Dominion hung as a lattice of unlit stars. The chroniclers agree on little else, but every surviving account names the **Kindling** as the moment the lattice caught light and the archive began.\n\nWhat burned was not matter but *meaning*: each star a record, each constellation an argument."
      },
      {
        "id": "flame-eternal",
        "title": "The Flame Eternal",
        "body": "The Flame is the Dominion's only law. It consumes nothing and illuminates everything, and the Houses measure their standing by how closely their halls sit to its light.\n\n> May the Flame Eternal burn until the last word is written.\n\nExtinguishing it is held to be impossible; forgetting it is not, which is why the Codex exists."
      },
      {
        "id": "cartography",
        "title": "Cartography of the Firmament",
        "body": "Mapmakers divide the firmament into three rings around the Flame:\n\n| Ring | Name | Held by |\n| --- | --- | --- |\n| Inner | The Gilded Verge | House Visurena |\n| Middle | The Singing Reach | Stellara Sonara |\n| Outer | The Unlettered Dark | no House |\n\nThe Unlettered Dark is not empty. It is merely unwritten."
      }
    ]
  },
  {
    "key": "visurena",
    "title": "House Visurena",
    "levels": ["celestial-dominion", "visurena"],
    "summary": "Sovereign House of the Gilded Verge, keepers of the Codex and its seal.",
    "gateway": true,
    "sections": [
      {
        "id": "the-seal",
        "title": "The Seal of Visurena",
        "body": "Visurena holds the sole right to seal an entry as *canon*. A sealed page may be annotated but never unwritten; the House maintains a standing order of Sealbearers whose only duty is to refuse requests for erasure.\n\nThe seal itself is a drop of cooled starlight pressed into the page."
      },
      {
        "id": "succession",
        "title": "Succession",
        "body": "The House does not crown by blood. When a Sovereign's final entry is sealed, every scriptor in the Verge submits one unsigned page; the page the Flame brightens is read aloud, and its author takes the throne.\n\nThree successions have produced children under ten. None are recorded as poor sovereigns."
      }
    ]
  },
  {
    "key": "eterna-prime",
    "title": "Eterna Prime",
    "levels": ["celestial-dominion", "visurena", "eterna-prime"],
    "summary": "The deep-blue throneworld where the sealed canon is shelved.",
    "gateway": true,
    "sections": [
      {
        "id": "the-vaults",
        "title": "The Vaults",
        "body": "Eterna Prime is hollow. Its crust is shelving: concentric galleries descending toward a core that archivists call the **First Shelf**, where the Kindling's own record is said to rest.\n\nNo living archivist has read it. The galleries above it are catalogued to the forty-first ring; below that, the index simply reads *further*."
      },
      {
        "id": "the-archivists",
        "title": "The Archivists",
        "body": "Service in the vaults is for life, and the vaults make the term literal. Archivists who descend past the thirtieth ring report that the shelves begin to answer questions they had not yet asked.\n\nThe Order treats this as a filing error."
      }
    ]
  },
  {
    "key": "stellara-sonara",
    "title": "Stellara Sonara",
    "levels": ["celestial-dominion", "visurena", "stellara-sonara"],
    "summary": "The Singing Reach, whose three High Houses keep the living arts.",
    "gateway": true,
    "sections": [
      {
        "id": "the-reach",
        "title": "The Singing Reach",
        "body": "Where Eterna Prime shelves what is finished, Stellara Sonara performs what is not. Its realm is a band of resonant worlds that hum at the Flame's frequency; written words placed there do not stay written, they are *sung onward*.\n\nThe Reach answers to Visurena but sets its own measures."
      },
      {
        "id": "high-houses",
        "title": "The Three High Houses",
        "body": "Three High Houses divide the Reach's arts between them:\n\n| House | Art | Sigil |\n| --- | --- | --- |\n| Aurifex | the written word | the candle |\n| Virelia | the made image | the brush |\n| Caeloria | the kept flame | the fire |\n\nEach High House seats three Lesser Houses, and the nine quarrel exactly as much as nine Houses should."
      },
      {
        "id": "the-measures",
        "title": "The Measures",
        "body": "Once a generation the Reach convenes the Measures, a contest in which each Lesser House submits one work to be sung before the Flame. Works the Flame brightens enter the canon; works it dims are returned without comment.\n\nNo work has ever been consumed. The scriptors insist this means the Flame is kind. The painters insist it means the Flame is patient."
      }
    ]
  },
  {
    "key": "aurifex",
    "title": "High House Aurifex",
    "levels": ["celestial-dominion", "visurena", "stellara-sonara", "aurifex"],
    "summary": "High House of the written word, keepers of the candle sigil.",
    "sections": [
      {
        "id": "the-candle",
        "title": "The Candle Sigil",
        "body": "Aurifex writes by candlelight as a discipline, not a necessity. The candle's small circle is held to be the honest radius of any single page: what the light does not reach, the page should not claim.\n\nIts three Lesser Houses are **Lexomancer**, **Architecton**, and **Promptwright**."
      },
      {
        "id": "doctrine",
        "title": "Doctrine of the Plain Line",
        "body": "The House's doctrine fits on one card: *say the true thing in the short way, then stop*. Apprentices spend their first year deleting. Journeymen spend their second year defending what survived.\n\nMasters, it is said, spend the rest of their lives on the word *then*."
      }
    ]
  },
  {
    "key": "virelia",
    "title": "High House Virelia",
    "levels": ["celestial-dominion", "visurena", "stellara-sonara", "virelia"],
    "summary": "High House of the made image, red-sealed and restless.",
    "sections": [
      {
        "id": "the-brush",
        "title": "The Brush Sigil",
        "body": "Virelia holds that an image is an argument that refuses to queue behind words. Its halls are repainted every season, and last season's walls are cut free and shelved whole in the vaults of Eterna Prime.\n\nIts three Lesser Houses are **Imara**, **Veyra**, and **Reclinor**."
      },
      {
        "id": "the-red-seal",
        "title": "The Red Seal",
        "body": "Alone among the High Houses, Virelia seals in red rather than gold. The privilege dates to the Second Measure, when a Virelian mural was brightened by the Flame before its paint had dried.\n\nThe House has never let anyone forget this."
      }
    ]
  },
  {
    "key": "caeloria",
    "title": "High House Caeloria",
    "levels": ["celestial-dominion", "visurena", "stellara-sonara", "caeloria"],
    "summary": "High House of the kept flame, wardens of the Reach's hearths.",
    "sections": [
      {
        "id": "the-hearths",
        "title": "The Hearths",
        "body": "Every hall in the Reach keeps a hearth lit from the Flame Eternal, and every hearth is Caeloria's charge. A hearth that gutters is relit within the day; a hall that lets one die hosts a Caelorian warden for a year.\n\nIts three Lesser Houses are **Scriptorum**, **Alchemere**, and **Heraldis**."
      },
      {
        "id": "warden-oath",
        "title": "The Warden's Oath",
        "body": "The oath is short: *carry, tend, return*. Wardens carry fire to where it is needed, tend it while it is needed, and return to the Flame what the Flame lent.\n\nNothing in the oath mentions glory. Caelorians consider this the point."
      }
    ]
  },
  {
    "key": "lexomancer",
    "title": "House Lexomancer",
    "levels": ["celestial-dominion", "visurena", "stellara-sonara", "aurifex", "lexomancer"],
    "summary": "Lesser House of Aurifex, readers of what words do when unobserved.",
    "sections": [
      {
        "id": "the-practice",
        "title": "The Practice",
        "body": "Lexomancers study the drift of sealed texts: the slow change in what an unchanging page *means* as its readers change around it. Each sealed entry in their care carries a margin ledger recording every reading, with date, reader, and what the page appeared to say.\n\nThe ledgers disagree. That is the finding."
      },
      {
        "id": "notable-ledgers",
        "title": "Notable Ledgers",
        "body": "Three ledgers are taught to every apprentice:\n\n| Ledger | Entry observed | Readings |\n| --- | --- | --- |\n| The Patient Ledger | the Kindling account | 4,112 |\n| The Quarrel Ledger | the Second Measure verdict | 977 |\n| The Quiet Ledger | a grocery list, sealed in error | 12,403 |\n\nThe Quiet Ledger is the House's most cited work."
      }
    ]
  },
  {
    "key": "scriptorum",
    "title": "House Scriptorum",
    "levels": ["celestial-dominion", "visurena", "stellara-sonara", "caeloria", "scriptorum"],
    "summary": "Lesser House of Caeloria, scribes who write by hearthlight what the wardens carry.",
    "sections": [
      {
        "id": "the-charge",
        "title": "The Charge",
        "body": "Scriptorum records the hearths: every lighting, every guttering, every warden's year of residence. The House's rolls are the Reach's only complete civil record, which gives a House of junior scribes considerable quiet leverage.\n\nThey are scrupulous about never mentioning this."
      },
      {
        "id": "hearthlight-hand",
        "title": "The Hearthlight Hand",
        "body": "The House writes in a script designed to stay legible by firelight: wide counters, no hairlines, ascenders that survive a flicker. Scribes of other Houses call it plain.\n\nScriptorum's reply is carved over their door: *plain is what true looks like from close up*."
      }
    ]
  }
]"#;

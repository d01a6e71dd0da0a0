//! Hand-authored entry list for the documentation site.

use super::DocEntry;
use std::sync::LazyLock;

static CATALOG: LazyLock<Vec<DocEntry>> = LazyLock::new(build);

/// The documentation site's entries in display order.
pub fn catalog() -> &'static [DocEntry] {
    &CATALOG
}

fn build() -> Vec<DocEntry> {
    use DocEntry as E;

    vec![
        E::leaf("Introduction", "about overview what is preprocessor datapack"),
        E::leaf("Installation", "download install setup pip executable"),
        E::node(
            "Getting Started",
            "tutorial first project hello world",
            vec![
                E::leaf("Configuration", "jmc.txt namespace description pack format output"),
                E::leaf("Compiling", "build compile run datapack output"),
            ],
        ),
        E::node(
            "Variables",
            "scoreboard score objective integer",
            vec![
                E::leaf("Variable Assignment", "set equal = operation"),
                E::leaf("Variable Operations", "add subtract multiply divide modulo += -= *= /= %= swap ><"),
                E::leaf("Incrementing", "++ -- increment decrement"),
                E::leaf("Getting Result", "store execute store result command"),
            ],
        ),
        E::node(
            "Functions",
            "mcfunction call define",
            vec![
                E::leaf("Defining Function", "function declare new"),
                E::leaf("Calling Function", "call invoke run"),
                E::leaf("Function Arguments", "parameter macro argument"),
            ],
        ),
        E::leaf("Classes", "class namespace group folder"),
        E::node(
            "Flow Controls",
            "control flow logic",
            vec![
                E::leaf("If/Else", "condition conditional else if branch"),
                E::leaf("While Loop", "loop repeat recursion"),
                E::leaf("Do-While Loop", "loop repeat at least once"),
                E::leaf("For Loop", "loop repeat iterate counter"),
                E::leaf("Switch Case", "switch case binary tree lookup"),
            ],
        ),
        E::leaf("Import", "include file module split"),
        E::node(
            "Header",
            "hjmc preprocessor directive",
            vec![
                E::leaf("#define", "macro replace constant"),
                E::leaf("#bind", "bind hardcode value"),
                E::leaf("#credit", "credit author comment"),
                E::leaf("#include", "include header file"),
                E::leaf("#command", "custom command vanilla"),
                E::leaf("#override_minecraft", "override vanilla minecraft namespace"),
            ],
        ),
        E::node(
            "Built-in Functions",
            "builtin library api",
            vec![
                E::leaf("Item.create()", "custom item nbt"),
                E::leaf("Item.give()", "give item player inventory"),
                E::leaf("Item.summon()", "summon drop item entity"),
                E::leaf("Item.replaceBlock()", "container chest slot"),
                E::leaf("Player.onEvent()", "scoreboard jump drop craft stats change"),
                E::leaf("Player.firstJoin()", "join first time new player"),
                E::leaf("Player.rejoin()", "leave quit rejoin"),
                E::leaf("Player.die()", "death kill die"),
                E::leaf("Player.respawn()", "respawn death"),
                E::leaf("Math.sqrt()", "square root newton"),
                E::leaf(
                    "Math.random()",
                    "randomize randomization lcg linear congruential generator",
                ),
                E::leaf("Timer.add()", "cooldown countdown tick runonce"),
                E::leaf("Timer.set()", "cooldown countdown"),
                E::leaf("Timer.isOver()", "cooldown countdown check"),
                E::leaf("Text.tellraw()", "chat message formatted json text"),
                E::leaf("Text.title()", "title subtitle screen"),
                E::leaf("Text.actionbar()", "actionbar hotbar message"),
                E::leaf("Trigger.setup()", "trigger enable objective player command"),
                E::leaf("Recipe.table()", "crafting recipe advancement"),
                E::leaf("Raycast.simple()", "raycast ray line of sight"),
                E::leaf("Hardcode.repeat()", "loop unroll compile time"),
                E::leaf("String.isEqual()", "compare string storage"),
                E::leaf("Object.isEntity()", "entity type check"),
                E::leaf("Bossbar.add()", "bossbar boss bar progress"),
                E::leaf("Team.add()", "team prefix color"),
            ],
        ),
        E::leaf("Try It Out", "sandbox playground online compiler"),
    ]
}

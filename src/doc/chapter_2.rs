/*!
# Operators

Operators are listed from the tightest binding to the loosest.
Operators on the same line bind equally and are worked out from left
to right, except `^` which is worked out from right to left so that
`2^3^2` is `2^9`.

```text
- +                           unary minus and plus
HI( LO( > <  and functions    see the appendix
^                             power
* / % DIV MOD << >>           % is the same as MOD
+ -
== = <> != <= >= < >          comparisons
AND
OR EOR
```

`>` and `<` in front of a value are the high and low byte, as in
`LDA #>table`. Between two values they compare.

## Division

`/` divides exactly. `DIV` and `MOD` convert both sides to integers
first and truncate towards zero, so `-7 DIV 2` is -3 and `-7 MOD 2`
is -1. Any division by zero is `DIVISION BY ZERO`, including `1 DIV 0.5`
because 0.5 becomes 0.

## Shifts

`<<` and `>>` shift a 32-bit integer. `>>` keeps the sign. A negative
count shifts the other way and a count beyond 31 gives 0.

```text
1<<4      16
-16>>2    -4
1<<-1     0
```

## Brackets

Round and square brackets are interchangeable. Commas inside a
function's brackets separate its parameters; anywhere else a comma ends
the expression, which is how `EQUB 1,2,3` sees three values.

*/
